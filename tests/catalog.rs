use sqlx_mysql_charset::{
    catalog, CharsetCatalog, CharsetDef, Codec, Collation, CollationDef, ServerVersion,
};

#[test]
fn it_maps_every_collation_to_a_charset_and_encoding() -> anyhow::Result<()> {
    let catalog = catalog();

    for id in 1..Collation::MAP_SIZE {
        let charset = catalog.charset_for_collation(Collation(id));
        assert!(charset.is_some(), "collation {id} has no charset");

        let encoding = catalog.client_encoding_for_collation(Collation(id), None);
        assert!(
            encoding.is_some_and(|encoding| !encoding.is_empty()),
            "collation {id} has no client encoding"
        );
    }

    Ok(())
}

#[test]
fn it_rejects_collations_outside_the_map() -> anyhow::Result<()> {
    let catalog = catalog();

    assert_eq!(catalog.charset_for_collation(Collation(0)), None);
    assert_eq!(catalog.charset_for_collation(Collation(255)), None);
    assert_eq!(catalog.charset_for_collation(Collation(309)), None);
    assert_eq!(catalog.charset_for_collation(None), None);
    assert_eq!(catalog.client_encoding_for_collation(None, Some("UTF-8")), None);

    Ok(())
}

#[test]
fn it_has_unique_encodings_per_charset() -> anyhow::Result<()> {
    for charset in catalog().charsets() {
        let encodings = charset.encodings();
        assert!(!encodings.is_empty(), "{charset} has no encodings");

        for (i, encoding) in encodings.iter().enumerate() {
            let duplicate = encodings[i + 1..]
                .iter()
                .any(|other| other.eq_ignore_ascii_case(encoding));

            assert!(!duplicate, "{charset} lists {encoding} twice");
        }
    }

    Ok(())
}

#[test]
fn it_round_trips_utf8() -> anyhow::Result<()> {
    let catalog = catalog();

    let charset = catalog
        .charset_for_encoding("utf-8", None)?
        .expect("utf-8 has a charset");

    assert!(catalog
        .charset(charset)
        .is_some_and(|charset| charset.has_encoding("UTF-8")));

    Ok(())
}

#[test]
fn it_finds_no_charset_for_an_empty_encoding() -> anyhow::Result<()> {
    let catalog = catalog();

    assert_eq!(catalog.charset_for_encoding("", None)?, None);
    assert_eq!(catalog.charset_for_encoding("", Some(&ServerVersion::new(8, 0, 33)))?, None);
    assert_eq!(catalog.collation_for_encoding("", None), None);

    Ok(())
}

#[test]
fn it_keeps_the_callers_spelling() -> anyhow::Result<()> {
    let catalog = catalog();

    assert_eq!(catalog.client_encoding_for_charset("utf8mb4", Some("UTF-8")), Some("UTF-8"));
    assert_eq!(catalog.client_encoding_for_charset("utf8mb4", Some("utf8")), Some("utf8"));
    assert_eq!(
        catalog.client_encoding_for_charset("utf8mb4", Some("bogus-encoding")),
        Some("UTF-8")
    );

    // a charset the catalog doesn't know may still be a custom one
    assert_eq!(
        catalog.client_encoding_for_charset("custom_cs", Some("X-Custom")),
        Some("X-Custom")
    );
    assert_eq!(catalog.client_encoding_for_charset("custom_cs", None), None);

    Ok(())
}

#[test]
fn it_picks_default_collations_by_priority() -> anyhow::Result<()> {
    let catalog = catalog();

    assert_eq!(catalog.default_collation("utf8mb4"), Some(Collation::UTF8MB4_GENERAL_CI));
    assert_eq!(catalog.default_collation("utf8"), Some(Collation::UTF8_GENERAL_CI));
    assert_eq!(catalog.default_collation("binary"), Some(Collation::BINARY));
    assert_eq!(catalog.default_collation("klingon"), None);

    assert_eq!(catalog.collation_for_encoding("GB18030", Some(&ServerVersion::new(8, 0, 0))), Some(Collation(248)));
    assert_eq!(catalog.collation_for_encoding("X-UNKNOWN", None), None);

    Ok(())
}

#[test]
fn it_knows_multibyte_encodings() -> anyhow::Result<()> {
    let catalog = catalog();

    assert!(catalog.is_multibyte("UTF-16"));
    assert!(catalog.is_multibyte("utf-8"));
    assert!(catalog.is_multibyte("Shift_JIS"));
    assert!(!catalog.is_multibyte("Cp1252"));
    assert!(!catalog.is_multibyte("X-UNKNOWN"));

    assert_eq!(catalog.max_len("utf8mb4"), Some(4));
    assert_eq!(catalog.max_len("utf8"), Some(3));
    assert_eq!(catalog.max_len("latin1"), Some(1));
    assert_eq!(catalog.max_len("klingon"), None);

    Ok(())
}

#[test]
fn it_gates_charsets_on_the_server_version() -> anyhow::Result<()> {
    let catalog = catalog();

    let mysql_5_6 = ServerVersion::new(5, 6, 51);
    let mysql_5_7_4 = ServerVersion::new(5, 7, 4);

    assert_eq!(catalog.charset_for_encoding("GB18030", None)?, Some("gb18030"));
    assert_eq!(catalog.charset_for_encoding("GB18030", Some(&mysql_5_6))?, None);
    assert_eq!(catalog.charset_for_encoding("GB18030", Some(&mysql_5_7_4))?, Some("gb18030"));

    // the first declared charset without a version, the highest priority with one
    assert_eq!(catalog.charset_for_encoding("MS932", None)?, Some("sjis"));
    assert_eq!(catalog.charset_for_encoding("MS932", Some(&mysql_5_6))?, Some("cp932"));

    // versions as reported by the server
    let mariadb: ServerVersion = "5.5.5-10.11.6-MariaDB-0+deb12u1".parse()?;
    assert_eq!(catalog.charset_for_encoding("gb18030", Some(&mariadb))?, Some("gb18030"));

    Ok(())
}

#[test]
fn it_resolves_error_message_encodings() -> anyhow::Result<()> {
    let catalog = catalog();

    assert_eq!(catalog.error_message_encoding(None), "UTF-8");
    assert_eq!(catalog.error_message_encoding(Some("klingon")), "UTF-8");
    assert_eq!(catalog.error_message_encoding(Some("cp1251")), "WINDOWS-1251");

    Ok(())
}

#[test]
fn it_lists_utf8mb4_collations() -> anyhow::Result<()> {
    let catalog = catalog();
    let utf8mb4 = catalog.utf8mb4_collations();

    assert!(utf8mb4.contains(&Collation::UTF8MB4_GENERAL_CI));
    assert!(utf8mb4.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(catalog.is_utf8mb4(Collation(46)));
    assert!(!catalog.is_utf8mb4(Collation::UTF8_GENERAL_CI));

    for &collation in utf8mb4 {
        assert_eq!(catalog.charset_for_collation(collation), Some("utf8mb4"));
    }

    Ok(())
}

#[test]
fn it_looks_up_collations_by_name() -> anyhow::Result<()> {
    let catalog = catalog();

    assert_eq!(catalog.collation_by_name("utf8mb4_general_ci"), Some(Collation::UTF8MB4_GENERAL_CI));
    assert_eq!(catalog.collation_by_name("LATIN1_SWEDISH_CI"), Some(Collation(8)));
    assert_eq!(catalog.collation_by_name("not_implemented"), None);

    assert_eq!(catalog.collation_name(Collation::BINARY), Some("binary"));
    assert_eq!(catalog.collation_name(Collation(0)), None);

    let collation = catalog.collation(Collation(45)).expect("collation 45 exists");
    let charset = catalog.charset_of(collation);

    assert_eq!(
        collation.display(charset).to_string(),
        "[index=45,collationName=utf8mb4_general_ci,charsetName=utf8mb4,clientEncoding=UTF-8]"
    );

    Ok(())
}

#[test]
fn it_is_a_pure_function_of_its_inputs() -> anyhow::Result<()> {
    let catalog = CharsetCatalog::global();
    let version = ServerVersion::new(8, 0, 33);

    for encoding in ["UTF-8", "MS932", "Cp1252", "GB18030", "EUC_KR", "X-UNKNOWN"] {
        assert_eq!(
            catalog.charset_for_encoding(encoding, Some(&version))?,
            catalog.charset_for_encoding(encoding, Some(&version))?
        );
    }

    assert!(std::ptr::eq(catalog, sqlx_mysql_charset::catalog()));
    assert!(catalog.encodings_configured() > catalog.charsets().len());

    Ok(())
}

#[test]
fn it_builds_with_a_custom_registry() -> anyhow::Result<()> {
    static CHARSETS: &[CharsetDef] = &[
        CharsetDef::new("latin1", 1, 0, &["Cp1252"]),
        CharsetDef::new("utf8mb4", 4, 0, &["UTF-8"]),
    ];

    let collations: Vec<CollationDef> = (1..Collation::MAP_SIZE)
        .map(|id| match id {
            45 => CollationDef::new(id, "utf8mb4_general_ci", 1, "utf8mb4"),
            _ => CollationDef::not_implemented(id),
        })
        .collect();

    let registry = |label: &str| -> Option<Codec> {
        label
            .eq_ignore_ascii_case("UTF-8")
            .then(|| Codec::new("utf8").with_aliases(["UTF-8"]))
    };

    let catalog = CharsetCatalog::builder()
        .charsets(CHARSETS)
        .collations(&collations)
        .registry(&registry)
        .build()?;

    assert_eq!(catalog.client_encoding_for_collation(Collation(45), None), Some("UTF8"));
    assert_eq!(catalog.charset_for_encoding("utf-8", None)?, Some("utf8mb4"));

    // unresolved, but kept for a single-byte charset
    assert_eq!(catalog.charset_for_encoding("cp1252", None)?, Some("latin1"));
    assert_eq!(catalog.charset_for_collation(Collation(1)), Some("latin1"));
    assert_eq!(catalog.utf8mb4_collations(), [Collation(45)]);

    Ok(())
}
