//! The built-in charset and collation tables.
//!
//! Both tables describe the catalog of a 5.7-era server. Collation IDs of `1..MAP_SIZE`
//! must all be present.

use crate::charset::CharsetDef;
use crate::collation::CollationDef;

/// Every MySQL charset and its equivalent client encodings.
///
/// Declaration order matters: without a server version, an encoding shared by several
/// charsets resolves to the one declared first.
#[rustfmt::skip]
pub static CHARSETS: &[CharsetDef] = &[
    CharsetDef::new("ascii", 1, 0, &["US-ASCII", "ASCII"]),

    CharsetDef::new("big5", 2, 0, &["Big5"]),
    CharsetDef::new("gbk", 2, 0, &["GBK"]),

    // Cp943 is closer to cp932, but has always been mapped to sjis
    CharsetDef::new("sjis", 2, 0, &["SHIFT_JIS", "Cp943", "WINDOWS-31J"]),
    CharsetDef::new("cp932", 2, 1, &["WINDOWS-31J"]),

    CharsetDef::new("gb2312", 2, 0, &["GB2312"]),
    CharsetDef::new("ujis", 3, 0, &["EUC_JP"]),
    CharsetDef::new("eucjpms", 3, 0, &["EUC_JP_Solaris"]).since(5, 0, 3),

    CharsetDef::new("gb18030", 4, 0, &["GB18030"]).since(5, 7, 4),

    CharsetDef::new("euckr", 2, 0, &["EUC-KR"]),

    CharsetDef::new("latin1", 1, 1, &["Cp1252", "ISO8859_1"]),
    CharsetDef::new("swe7", 1, 0, &["Cp1252"]),
    CharsetDef::new("hp8", 1, 0, &["Cp1252"]),
    CharsetDef::new("dec8", 1, 0, &["Cp1252"]),
    CharsetDef::new("armscii8", 1, 0, &["Cp1252"]),
    CharsetDef::new("geostd8", 1, 0, &["Cp1252"]),

    CharsetDef::new("latin2", 1, 0, &["ISO8859_2"]),

    CharsetDef::new("greek", 1, 0, &["ISO8859_7", "greek"]),
    CharsetDef::new("latin7", 1, 0, &["ISO-8859-13"]),

    CharsetDef::new("hebrew", 1, 0, &["ISO8859_8"]),
    CharsetDef::new("latin5", 1, 0, &["ISO8859_9"]),

    CharsetDef::new("cp850", 1, 0, &["Cp850", "Cp437"]),

    CharsetDef::new("cp852", 1, 0, &["Cp852"]),
    // Kamenicky, usually known as Cp895 which has no official specification; close to Cp852
    CharsetDef::new("keybcs2", 1, 0, &["Cp852"]),

    CharsetDef::new("cp866", 1, 0, &["Cp866"]),

    CharsetDef::new("koi8r", 1, 1, &["KOI8_R"]),
    CharsetDef::new("koi8u", 1, 0, &["KOI8_R"]),

    CharsetDef::new("tis620", 1, 0, &["TIS620"]),

    CharsetDef::new("cp1250", 1, 0, &["Cp1250"]),

    CharsetDef::new("cp1251", 1, 1, &["Cp1251"]),

    CharsetDef::new("cp1256", 1, 0, &["Cp1256"]),
    CharsetDef::new("cp1257", 1, 0, &["Cp1257"]),
    CharsetDef::new("macroman", 1, 0, &["MacRoman"]),
    CharsetDef::new("macce", 1, 0, &["MacCentralEurope"]),

    CharsetDef::new("utf8", 3, 1, &["UTF-8"]),
    CharsetDef::new("utf8mb4", 4, 0, &["UTF-8"]),

    CharsetDef::new("ucs2", 2, 0, &["UnicodeBig"]),

    CharsetDef::new("binary", 1, 1, &["ISO8859_1"]),

    CharsetDef::new("utf16", 4, 0, &["UTF-16"]),
    CharsetDef::new("utf16le", 4, 0, &["UTF-16LE"]),
    CharsetDef::new("utf32", 4, 0, &["UTF-32"]),
];

/// Every collation ID in `1..MAP_SIZE`, in ID order.
#[rustfmt::skip]
pub static COLLATIONS: &[CollationDef] = &[
    CollationDef::new(1, "big5_chinese_ci", 1, "big5"),
    CollationDef::new(2, "latin2_czech_cs", 0, "latin2"),
    CollationDef::new(3, "dec8_swedish_ci", 0, "dec8"),
    CollationDef::new(4, "cp850_general_ci", 1, "cp850"),
    CollationDef::new(5, "latin1_german1_ci", 1, "latin1"),
    CollationDef::new(6, "hp8_english_ci", 0, "hp8"),
    CollationDef::new(7, "koi8r_general_ci", 0, "koi8r"),
    CollationDef::new(8, "latin1_swedish_ci", 0, "latin1"),
    CollationDef::new(9, "latin2_general_ci", 1, "latin2"),
    CollationDef::new(10, "swe7_swedish_ci", 0, "swe7"),
    CollationDef::new(11, "ascii_general_ci", 0, "ascii"),
    CollationDef::new(12, "ujis_japanese_ci", 0, "ujis"),
    CollationDef::new(13, "sjis_japanese_ci", 0, "sjis"),
    CollationDef::new(14, "cp1251_bulgarian_ci", 0, "cp1251"),
    CollationDef::new(15, "latin1_danish_ci", 0, "latin1"),
    CollationDef::new(16, "hebrew_general_ci", 0, "hebrew"),
    CollationDef::not_implemented(17),
    CollationDef::new(18, "tis620_thai_ci", 0, "tis620"),
    CollationDef::new(19, "euckr_korean_ci", 0, "euckr"),
    CollationDef::new(20, "latin7_estonian_cs", 0, "latin7"),
    CollationDef::new(21, "latin2_hungarian_ci", 0, "latin2"),
    CollationDef::new(22, "koi8u_general_ci", 0, "koi8u"),
    CollationDef::new(23, "cp1251_ukrainian_ci", 0, "cp1251"),
    CollationDef::new(24, "gb2312_chinese_ci", 0, "gb2312"),
    CollationDef::new(25, "greek_general_ci", 0, "greek"),
    CollationDef::new(26, "cp1250_general_ci", 1, "cp1250"),
    CollationDef::new(27, "latin2_croatian_ci", 0, "latin2"),
    CollationDef::new(28, "gbk_chinese_ci", 1, "gbk"),
    CollationDef::new(29, "cp1257_lithuanian_ci", 0, "cp1257"),
    CollationDef::new(30, "latin5_turkish_ci", 1, "latin5"),
    CollationDef::new(31, "latin1_german2_ci", 0, "latin1"),
    CollationDef::new(32, "armscii8_general_ci", 0, "armscii8"),
    CollationDef::new(33, "utf8_general_ci", 1, "utf8"),
    CollationDef::new(34, "cp1250_czech_cs", 0, "cp1250"),
    CollationDef::new(35, "ucs2_general_ci", 1, "ucs2"),
    CollationDef::new(36, "cp866_general_ci", 1, "cp866"),
    CollationDef::new(37, "keybcs2_general_ci", 1, "keybcs2"),
    CollationDef::new(38, "macce_general_ci", 1, "macce"),
    CollationDef::new(39, "macroman_general_ci", 1, "macroman"),
    CollationDef::new(40, "cp852_general_ci", 1, "cp852"),
    CollationDef::new(41, "latin7_general_ci", 1, "latin7"),
    CollationDef::new(42, "latin7_general_cs", 0, "latin7"),
    CollationDef::new(43, "macce_bin", 0, "macce"),
    CollationDef::new(44, "cp1250_croatian_ci", 0, "cp1250"),
    CollationDef::new(45, "utf8mb4_general_ci", 1, "utf8mb4"),
    CollationDef::new(46, "utf8mb4_bin", 0, "utf8mb4"),
    CollationDef::new(47, "latin1_bin", 0, "latin1"),
    CollationDef::new(48, "latin1_general_ci", 0, "latin1"),
    CollationDef::new(49, "latin1_general_cs", 0, "latin1"),
    CollationDef::new(50, "cp1251_bin", 0, "cp1251"),
    CollationDef::new(51, "cp1251_general_ci", 1, "cp1251"),
    CollationDef::new(52, "cp1251_general_cs", 0, "cp1251"),
    CollationDef::new(53, "macroman_bin", 0, "macroman"),
    CollationDef::new(54, "utf16_general_ci", 1, "utf16"),
    CollationDef::new(55, "utf16_bin", 0, "utf16"),
    CollationDef::new(56, "utf16le_general_ci", 1, "utf16le"),
    CollationDef::new(57, "cp1256_general_ci", 1, "cp1256"),
    CollationDef::new(58, "cp1257_bin", 0, "cp1257"),
    CollationDef::new(59, "cp1257_general_ci", 1, "cp1257"),
    CollationDef::new(60, "utf32_general_ci", 1, "utf32"),
    CollationDef::new(61, "utf32_bin", 0, "utf32"),
    CollationDef::new(62, "utf16le_bin", 0, "utf16le"),
    CollationDef::new(63, "binary", 1, "binary"),
    CollationDef::new(64, "armscii8_bin", 0, "armscii8"),
    CollationDef::new(65, "ascii_bin", 0, "ascii"),
    CollationDef::new(66, "cp1250_bin", 0, "cp1250"),
    CollationDef::new(67, "cp1256_bin", 0, "cp1256"),
    CollationDef::new(68, "cp866_bin", 0, "cp866"),
    CollationDef::new(69, "dec8_bin", 0, "dec8"),
    CollationDef::new(70, "greek_bin", 0, "greek"),
    CollationDef::new(71, "hebrew_bin", 0, "hebrew"),
    CollationDef::new(72, "hp8_bin", 0, "hp8"),
    CollationDef::new(73, "keybcs2_bin", 0, "keybcs2"),
    CollationDef::new(74, "koi8r_bin", 0, "koi8r"),
    CollationDef::new(75, "koi8u_bin", 0, "koi8u"),
    CollationDef::not_implemented(76),
    CollationDef::new(77, "latin2_bin", 0, "latin2"),
    CollationDef::new(78, "latin5_bin", 0, "latin5"),
    CollationDef::new(79, "latin7_bin", 0, "latin7"),
    CollationDef::new(80, "cp850_bin", 0, "cp850"),
    CollationDef::new(81, "cp852_bin", 0, "cp852"),
    CollationDef::new(82, "swe7_bin", 0, "swe7"),
    CollationDef::new(83, "utf8_bin", 0, "utf8"),
    CollationDef::new(84, "big5_bin", 0, "big5"),
    CollationDef::new(85, "euckr_bin", 0, "euckr"),
    CollationDef::new(86, "gb2312_bin", 0, "gb2312"),
    CollationDef::new(87, "gbk_bin", 0, "gbk"),
    CollationDef::new(88, "sjis_bin", 0, "sjis"),
    CollationDef::new(89, "tis620_bin", 0, "tis620"),
    CollationDef::new(90, "ucs2_bin", 0, "ucs2"),
    CollationDef::new(91, "ujis_bin", 0, "ujis"),
    CollationDef::new(92, "geostd8_general_ci", 0, "geostd8"),
    CollationDef::new(93, "geostd8_bin", 0, "geostd8"),
    CollationDef::new(94, "latin1_spanish_ci", 0, "latin1"),
    CollationDef::new(95, "cp932_japanese_ci", 1, "cp932"),
    CollationDef::new(96, "cp932_bin", 0, "cp932"),
    CollationDef::new(97, "eucjpms_japanese_ci", 1, "eucjpms"),
    CollationDef::new(98, "eucjpms_bin", 0, "eucjpms"),
    CollationDef::new(99, "cp1250_polish_ci", 0, "cp1250"),
    CollationDef::not_implemented(100),
    CollationDef::new(101, "utf16_unicode_ci", 0, "utf16"),
    CollationDef::new(102, "utf16_icelandic_ci", 0, "utf16"),
    CollationDef::new(103, "utf16_latvian_ci", 0, "utf16"),
    CollationDef::new(104, "utf16_romanian_ci", 0, "utf16"),
    CollationDef::new(105, "utf16_slovenian_ci", 0, "utf16"),
    CollationDef::new(106, "utf16_polish_ci", 0, "utf16"),
    CollationDef::new(107, "utf16_estonian_ci", 0, "utf16"),
    CollationDef::new(108, "utf16_spanish_ci", 0, "utf16"),
    CollationDef::new(109, "utf16_swedish_ci", 0, "utf16"),
    CollationDef::new(110, "utf16_turkish_ci", 0, "utf16"),
    CollationDef::new(111, "utf16_czech_ci", 0, "utf16"),
    CollationDef::new(112, "utf16_danish_ci", 0, "utf16"),
    CollationDef::new(113, "utf16_lithuanian_ci", 0, "utf16"),
    CollationDef::new(114, "utf16_slovak_ci", 0, "utf16"),
    CollationDef::new(115, "utf16_spanish2_ci", 0, "utf16"),
    CollationDef::new(116, "utf16_roman_ci", 0, "utf16"),
    CollationDef::new(117, "utf16_persian_ci", 0, "utf16"),
    CollationDef::new(118, "utf16_esperanto_ci", 0, "utf16"),
    CollationDef::new(119, "utf16_hungarian_ci", 0, "utf16"),
    CollationDef::new(120, "utf16_sinhala_ci", 0, "utf16"),
    CollationDef::new(121, "utf16_german2_ci", 0, "utf16"),
    CollationDef::new(122, "utf16_croatian_ci", 0, "utf16"),
    CollationDef::new(123, "utf16_unicode_520_ci", 0, "utf16"),
    CollationDef::new(124, "utf16_vietnamese_ci", 0, "utf16"),
    CollationDef::not_implemented(125),
    CollationDef::not_implemented(126),
    CollationDef::not_implemented(127),
    CollationDef::new(128, "ucs2_unicode_ci", 0, "ucs2"),
    CollationDef::new(129, "ucs2_icelandic_ci", 0, "ucs2"),
    CollationDef::new(130, "ucs2_latvian_ci", 0, "ucs2"),
    CollationDef::new(131, "ucs2_romanian_ci", 0, "ucs2"),
    CollationDef::new(132, "ucs2_slovenian_ci", 0, "ucs2"),
    CollationDef::new(133, "ucs2_polish_ci", 0, "ucs2"),
    CollationDef::new(134, "ucs2_estonian_ci", 0, "ucs2"),
    CollationDef::new(135, "ucs2_spanish_ci", 0, "ucs2"),
    CollationDef::new(136, "ucs2_swedish_ci", 0, "ucs2"),
    CollationDef::new(137, "ucs2_turkish_ci", 0, "ucs2"),
    CollationDef::new(138, "ucs2_czech_ci", 0, "ucs2"),
    CollationDef::new(139, "ucs2_danish_ci", 0, "ucs2"),
    CollationDef::new(140, "ucs2_lithuanian_ci", 0, "ucs2"),
    CollationDef::new(141, "ucs2_slovak_ci", 0, "ucs2"),
    CollationDef::new(142, "ucs2_spanish2_ci", 0, "ucs2"),
    CollationDef::new(143, "ucs2_roman_ci", 0, "ucs2"),
    CollationDef::new(144, "ucs2_persian_ci", 0, "ucs2"),
    CollationDef::new(145, "ucs2_esperanto_ci", 0, "ucs2"),
    CollationDef::new(146, "ucs2_hungarian_ci", 0, "ucs2"),
    CollationDef::new(147, "ucs2_sinhala_ci", 0, "ucs2"),
    CollationDef::new(148, "ucs2_german2_ci", 0, "ucs2"),
    CollationDef::new(149, "ucs2_croatian_ci", 0, "ucs2"),
    CollationDef::new(150, "ucs2_unicode_520_ci", 0, "ucs2"),
    CollationDef::new(151, "ucs2_vietnamese_ci", 0, "ucs2"),
    CollationDef::not_implemented(152),
    CollationDef::not_implemented(153),
    CollationDef::not_implemented(154),
    CollationDef::not_implemented(155),
    CollationDef::not_implemented(156),
    CollationDef::not_implemented(157),
    CollationDef::not_implemented(158),
    CollationDef::new(159, "ucs2_general_mysql500_ci", 0, "ucs2"),
    CollationDef::new(160, "utf32_unicode_ci", 0, "utf32"),
    CollationDef::new(161, "utf32_icelandic_ci", 0, "utf32"),
    CollationDef::new(162, "utf32_latvian_ci", 0, "utf32"),
    CollationDef::new(163, "utf32_romanian_ci", 0, "utf32"),
    CollationDef::new(164, "utf32_slovenian_ci", 0, "utf32"),
    CollationDef::new(165, "utf32_polish_ci", 0, "utf32"),
    CollationDef::new(166, "utf32_estonian_ci", 0, "utf32"),
    CollationDef::new(167, "utf32_spanish_ci", 0, "utf32"),
    CollationDef::new(168, "utf32_swedish_ci", 0, "utf32"),
    CollationDef::new(169, "utf32_turkish_ci", 0, "utf32"),
    CollationDef::new(170, "utf32_czech_ci", 0, "utf32"),
    CollationDef::new(171, "utf32_danish_ci", 0, "utf32"),
    CollationDef::new(172, "utf32_lithuanian_ci", 0, "utf32"),
    CollationDef::new(173, "utf32_slovak_ci", 0, "utf32"),
    CollationDef::new(174, "utf32_spanish2_ci", 0, "utf32"),
    CollationDef::new(175, "utf32_roman_ci", 0, "utf32"),
    CollationDef::new(176, "utf32_persian_ci", 0, "utf32"),
    CollationDef::new(177, "utf32_esperanto_ci", 0, "utf32"),
    CollationDef::new(178, "utf32_hungarian_ci", 0, "utf32"),
    CollationDef::new(179, "utf32_sinhala_ci", 0, "utf32"),
    CollationDef::new(180, "utf32_german2_ci", 0, "utf32"),
    CollationDef::new(181, "utf32_croatian_ci", 0, "utf32"),
    CollationDef::new(182, "utf32_unicode_520_ci", 0, "utf32"),
    CollationDef::new(183, "utf32_vietnamese_ci", 0, "utf32"),
    CollationDef::not_implemented(184),
    CollationDef::not_implemented(185),
    CollationDef::not_implemented(186),
    CollationDef::not_implemented(187),
    CollationDef::not_implemented(188),
    CollationDef::not_implemented(189),
    CollationDef::not_implemented(190),
    CollationDef::not_implemented(191),
    CollationDef::new(192, "utf8_unicode_ci", 0, "utf8"),
    CollationDef::new(193, "utf8_icelandic_ci", 0, "utf8"),
    CollationDef::new(194, "utf8_latvian_ci", 0, "utf8"),
    CollationDef::new(195, "utf8_romanian_ci", 0, "utf8"),
    CollationDef::new(196, "utf8_slovenian_ci", 0, "utf8"),
    CollationDef::new(197, "utf8_polish_ci", 0, "utf8"),
    CollationDef::new(198, "utf8_estonian_ci", 0, "utf8"),
    CollationDef::new(199, "utf8_spanish_ci", 0, "utf8"),
    CollationDef::new(200, "utf8_swedish_ci", 0, "utf8"),
    CollationDef::new(201, "utf8_turkish_ci", 0, "utf8"),
    CollationDef::new(202, "utf8_czech_ci", 0, "utf8"),
    CollationDef::new(203, "utf8_danish_ci", 0, "utf8"),
    CollationDef::new(204, "utf8_lithuanian_ci", 0, "utf8"),
    CollationDef::new(205, "utf8_slovak_ci", 0, "utf8"),
    CollationDef::new(206, "utf8_spanish2_ci", 0, "utf8"),
    CollationDef::new(207, "utf8_roman_ci", 0, "utf8"),
    CollationDef::new(208, "utf8_persian_ci", 0, "utf8"),
    CollationDef::new(209, "utf8_esperanto_ci", 0, "utf8"),
    CollationDef::new(210, "utf8_hungarian_ci", 0, "utf8"),
    CollationDef::new(211, "utf8_sinhala_ci", 0, "utf8"),
    CollationDef::new(212, "utf8_german2_ci", 0, "utf8"),
    CollationDef::new(213, "utf8_croatian_ci", 0, "utf8"),
    CollationDef::new(214, "utf8_unicode_520_ci", 0, "utf8"),
    CollationDef::new(215, "utf8_vietnamese_ci", 0, "utf8"),
    CollationDef::not_implemented(216),
    CollationDef::not_implemented(217),
    CollationDef::not_implemented(218),
    CollationDef::not_implemented(219),
    CollationDef::not_implemented(220),
    CollationDef::not_implemented(221),
    CollationDef::not_implemented(222),
    CollationDef::new(223, "utf8_general_mysql500_ci", 0, "utf8"),
    CollationDef::new(224, "utf8mb4_unicode_ci", 0, "utf8mb4"),
    CollationDef::new(225, "utf8mb4_icelandic_ci", 0, "utf8mb4"),
    CollationDef::new(226, "utf8mb4_latvian_ci", 0, "utf8mb4"),
    CollationDef::new(227, "utf8mb4_romanian_ci", 0, "utf8mb4"),
    CollationDef::new(228, "utf8mb4_slovenian_ci", 0, "utf8mb4"),
    CollationDef::new(229, "utf8mb4_polish_ci", 0, "utf8mb4"),
    CollationDef::new(230, "utf8mb4_estonian_ci", 0, "utf8mb4"),
    CollationDef::new(231, "utf8mb4_spanish_ci", 0, "utf8mb4"),
    CollationDef::new(232, "utf8mb4_swedish_ci", 0, "utf8mb4"),
    CollationDef::new(233, "utf8mb4_turkish_ci", 0, "utf8mb4"),
    CollationDef::new(234, "utf8mb4_czech_ci", 0, "utf8mb4"),
    CollationDef::new(235, "utf8mb4_danish_ci", 0, "utf8mb4"),
    CollationDef::new(236, "utf8mb4_lithuanian_ci", 0, "utf8mb4"),
    CollationDef::new(237, "utf8mb4_slovak_ci", 0, "utf8mb4"),
    CollationDef::new(238, "utf8mb4_spanish2_ci", 0, "utf8mb4"),
    CollationDef::new(239, "utf8mb4_roman_ci", 0, "utf8mb4"),
    CollationDef::new(240, "utf8mb4_persian_ci", 0, "utf8mb4"),
    CollationDef::new(241, "utf8mb4_esperanto_ci", 0, "utf8mb4"),
    CollationDef::new(242, "utf8mb4_hungarian_ci", 0, "utf8mb4"),
    CollationDef::new(243, "utf8mb4_sinhala_ci", 0, "utf8mb4"),
    CollationDef::new(244, "utf8mb4_german2_ci", 0, "utf8mb4"),
    CollationDef::new(245, "utf8mb4_croatian_ci", 0, "utf8mb4"),
    CollationDef::new(246, "utf8mb4_unicode_520_ci", 0, "utf8mb4"),
    CollationDef::new(247, "utf8mb4_vietnamese_ci", 0, "utf8mb4"),
    CollationDef::new(248, "gb18030_chinese_ci", 1, "gb18030"),
    CollationDef::new(249, "gb18030_bin", 0, "gb18030"),
    CollationDef::new(250, "gb18030_unicode_520_ci", 0, "gb18030"),
    CollationDef::not_implemented(251),
    CollationDef::not_implemented(252),
    CollationDef::not_implemented(253),
    CollationDef::not_implemented(254),
];
