//! Resolution of human-readable encoding names to canonical codec names and aliases.
//!
//! MySQL has no notion of client encodings, so every charset in the catalog names one or
//! more encodings in the vocabulary of the client's text codec facility. A [`CodecRegistry`]
//! turns each of those names into the canonical name and the full alias list, which is what
//! makes lookups like `"latin1"`, `"ISO8859_1"` and `"ISO-8859-1"` all land on the same charset.

use std::borrow::Cow;

use encoding_rs::Encoding;

/// A text codec known to a [`CodecRegistry`].
#[derive(Debug, Clone)]
pub struct Codec {
    name: Cow<'static, str>,
    aliases: Vec<Cow<'static, str>>,
    encoding: Option<&'static Encoding>,
}

impl Codec {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            encoding: None,
        }
    }

    pub fn with_aliases<I>(mut self, aliases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Associates the `encoding_rs` encoding that decodes this codec.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// The canonical name of this codec.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.aliases.iter().map(|alias| &**alias)
    }

    /// The `encoding_rs` encoding for this codec, if `encoding_rs` implements it.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }
}

/// A registry of text codecs, consulted once per encoding name while a catalog is built.
pub trait CodecRegistry: Send + Sync {
    /// Resolve `label` to a codec, or `None` if the registry does not know it.
    fn resolve(&self, label: &str) -> Option<Codec>;
}

impl<F> CodecRegistry for F
where
    F: Fn(&str) -> Option<Codec> + Send + Sync,
{
    fn resolve(&self, label: &str) -> Option<Codec> {
        self(label)
    }
}

/// The default codec registry.
///
/// Knows the canonical names and aliases of every encoding the built-in charset table
/// refers to, using the long-established names (`Cp1252`, `ISO8859_1`, `UnicodeBig`)
/// that MySQL clients have always accepted. Any other label is resolved through
/// [`Encoding::for_label_no_replacement`], i.e. the WHATWG Encoding Standard.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardCodecs;

impl CodecRegistry for StandardCodecs {
    fn resolve(&self, label: &str) -> Option<Codec> {
        let label = label.trim();

        if let Some(def) = CODECS.iter().find(|def| def.matches(label)) {
            return Some(def.to_codec());
        }

        let encoding = Encoding::for_label_no_replacement(label.as_bytes())?;

        Some(Codec::new(encoding.name()).with_encoding(encoding))
    }
}

struct CodecDef {
    name: &'static str,
    aliases: &'static [&'static str],
    // WHATWG label of the closest `encoding_rs` encoding
    whatwg: Option<&'static str>,
}

impl CodecDef {
    fn matches(&self, label: &str) -> bool {
        self.name.eq_ignore_ascii_case(label)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(label))
    }

    fn to_codec(&self) -> Codec {
        let codec = Codec::new(self.name).with_aliases(self.aliases.iter().copied());

        match self.whatwg.and_then(|label| Encoding::for_label(label.as_bytes())) {
            Some(encoding) => codec.with_encoding(encoding),
            None => codec,
        }
    }
}

macro_rules! codec {
    ($name:literal, [$($alias:literal),* $(,)?]) => {
        CodecDef { name: $name, aliases: &[$($alias),*], whatwg: None }
    };

    ($name:literal, [$($alias:literal),* $(,)?], $whatwg:literal) => {
        CodecDef { name: $name, aliases: &[$($alias),*], whatwg: Some($whatwg) }
    };
}

#[rustfmt::skip]
static CODECS: &[CodecDef] = &[
    codec!("US-ASCII", ["iso-ir-6", "ANSI_X3.4-1986", "ISO_646.irv:1991", "ASCII", "ISO646-US", "us", "IBM367", "cp367", "csASCII", "default", "646", "iso_646.irv:1983", "ANSI_X3.4-1968", "ascii7"]),
    codec!("Big5", ["csBig5"], "big5"),
    codec!("GBK", ["CP936", "windows-936"], "gbk"),
    codec!("Shift_JIS", ["shift_jis", "x-sjis", "sjis", "shift-jis", "ms_kanji", "csShiftJIS"], "shift_jis"),
    codec!("x-IBM943", ["cp943", "ibm943", "ibm-943", "943"]),
    codec!("windows-31j", ["MS932", "windows-932", "csWindows31J"], "windows-31j"),
    codec!("GB2312", ["gb2312", "euc-cn", "x-EUC-CN", "euccn", "EUC_CN", "gb2312-80", "gb2312-1980"], "gb2312"),
    codec!("EUC-JP", ["csEUCPkdFmtjapanese", "x-euc-jp", "eucjis", "Extended_UNIX_Code_Packed_Format_for_Japanese", "euc_jp", "eucjp", "x-eucjp"], "euc-jp"),
    codec!("x-eucJP-Open", ["EUC_JP_Solaris", "eucJP-open"]),
    codec!("GB18030", ["gb18030-2000"], "gb18030"),
    codec!("EUC-KR", ["ksc5601-1987", "csEUCKR", "ksc5601_1987", "ksc5601", "5601", "euc_kr", "ksc_5601", "ks_c_5601-1987", "euckr"], "euc-kr"),
    codec!("windows-1252", ["cp1252", "cp5348"], "windows-1252"),
    codec!("ISO-8859-1", ["iso-ir-100", "ISO_8859-1", "latin1", "l1", "IBM819", "cp819", "csISOLatin1", "819", "IBM-819", "ISO8859_1", "ISO_8859-1:1987", "ISO_8859_1", "8859_1", "ISO8859-1"]),
    codec!("ISO-8859-2", ["iso8859_2", "8859_2", "iso-ir-101", "ISO_8859-2", "ISO_8859-2:1987", "ISO8859-2", "latin2", "l2", "ibm912", "ibm-912", "cp912", "912", "csISOLatin2"], "iso-8859-2"),
    codec!("ISO-8859-7", ["iso8859_7", "8859_7", "iso-ir-126", "ISO_8859-7", "ISO_8859-7:1987", "ELOT_928", "ECMA-118", "greek", "greek8", "csISOLatinGreek", "sun_eu_greek", "ibm813", "ibm-813", "813", "cp813", "iso8859-7"], "iso-8859-7"),
    codec!("ISO-8859-13", ["iso8859_13", "8859_13", "iso_8859-13", "ISO8859-13"], "iso-8859-13"),
    codec!("ISO-8859-8", ["iso8859_8", "8859_8", "iso-ir-138", "ISO_8859-8", "ISO_8859-8:1988", "cp916", "916", "ibm916", "ibm-916", "hebrew", "csISOLatinHebrew", "ISO8859-8"], "iso-8859-8"),
    codec!("ISO-8859-9", ["iso8859_9", "8859_9", "iso-ir-148", "ISO_8859-9", "ISO_8859-9:1989", "ISO8859-9", "latin5", "l5", "ibm920", "ibm-920", "920", "cp920", "csISOLatin5"], "iso-8859-9"),
    codec!("IBM850", ["cp850", "ibm-850", "ibm850", "850", "cspc850multilingual"]),
    codec!("IBM437", ["cp437", "ibm437", "ibm-437", "437", "cspc8codepage437", "windows-437"]),
    codec!("IBM852", ["cp852", "ibm852", "ibm-852", "852", "csPCp852"]),
    codec!("IBM866", ["cp866", "ibm866", "ibm-866", "866", "csIBM866"], "ibm866"),
    codec!("KOI8-R", ["koi8_r", "koi8", "cskoi8r"], "koi8-r"),
    codec!("TIS-620", ["tis620", "tis620.2533"], "tis-620"),
    codec!("windows-1250", ["cp1250", "cp5346"], "windows-1250"),
    codec!("windows-1251", ["cp1251", "cp5347", "ansi-1251"], "windows-1251"),
    codec!("windows-1256", ["cp1256"], "windows-1256"),
    codec!("windows-1257", ["cp1257", "cp5353"], "windows-1257"),
    codec!("x-MacRoman", ["MacRoman"], "macintosh"),
    codec!("x-MacCentralEurope", ["MacCentralEurope"]),
    codec!("UTF-8", ["unicode-1-1-utf-8", "UTF8"], "utf-8"),
    codec!("UTF-16", ["UTF_16", "utf16", "unicode", "UnicodeBig"], "utf-16be"),
    codec!("UTF-16LE", ["UTF_16LE", "X-UTF-16LE", "UnicodeLittleUnmarked"], "utf-16le"),
    codec!("UTF-32", ["UTF_32", "UTF32"]),
];
