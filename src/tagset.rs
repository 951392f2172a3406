//! Reference table of the Indonesian POS tagset
//!
//! Purely descriptive: the corpus never validates its tags against this
//! table, and [`Corpus::pos_list`](crate::Corpus::pos_list) reports whatever
//! tags the loaded file actually uses.

use std::fmt;

/// One tag with a short description and example words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub code: &'static str,
    pub description: &'static str,
    pub examples: &'static str,
}

impl fmt::Display for TagInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<4} {} (e.g. {})",
            self.code, self.description, self.examples
        )
    }
}

const fn tag(code: &'static str, description: &'static str, examples: &'static str) -> TagInfo {
    TagInfo {
        code,
        description,
        examples,
    }
}

/// All tags, in documentation order
pub static TAGSET: &[TagInfo] = &[
    tag("CC", "Coordinating conjunction", "dan, tetapi, atau"),
    tag(
        "CD",
        "Cardinal number, including fractions, decimals, dates and years",
        "dua, juta, enam, 7916, sepertiga, 0,025, banyak, kedua, ribuan, 2007",
    ),
    tag("OD", "Ordinal number", "ketiga, ke-4, pertama"),
    tag("DT", "Determiner / article", "para, sang, si"),
    tag(
        "FW",
        "Foreign word not yet in the Indonesian dictionary",
        "climate change, terms and conditions",
    ),
    tag("IN", "Preposition", "dalam, dengan, di, ke, oleh, pada, untuk"),
    tag(
        "JJ",
        "Adjective",
        "bersih, panjang, hitam, lama, jauh, marah, suram, nasional, bulat",
    ),
    tag("MD", "Modal and auxiliary verb", "boleh, harus, sudah, mesti, perlu"),
    tag("NEG", "Negation", "tidak, belum, jangan"),
    tag("NN", "Noun", "monyet, bawah, sekarang, rupiah"),
    tag(
        "NNP",
        "Proper noun; each part of a multi-word name is tagged NNP",
        "Boediono, Laut Jawa, Indonesia, Bank Mandiri, BBKP, Januari, Senin, Idul Fitri",
    ),
    tag(
        "NND",
        "Classifier, partitive, and measurement noun",
        "orang, ton, helai, lembar",
    ),
    tag("PR", "Demonstrative pronoun", "ini, itu, sini, situ"),
    tag(
        "PRP",
        "Personal pronoun",
        "saya, kami, kita, kamu, kalian, dia, mereka",
    ),
    tag("RB", "Adverb", "sangat, hanya, justru, niscaya, segera"),
    tag("RP", "Emphatic particle", "pun, -lah, -kah"),
    tag(
        "SC",
        "Subordinating conjunction",
        "sejak, jika, seandainya, supaya, meski, sebab, maka, tanpa, bahwa, yang",
    ),
    tag("SYM", "Symbol", "IDR, +, %, @"),
    tag("UH", "Interjection", "brengsek, oh, ooh, aduh, ayo, mari, hai"),
    tag(
        "VB",
        "Verb, transitive or intransitive, active or passive, and copula",
        "merancang, mengatur, pergi, bekerja, tertidur",
    ),
    tag(
        "WH",
        "Question word",
        "siapa, apa, mana, kenapa, kapan, di mana, bagaimana, berapa",
    ),
    tag("X", "Unknown or uncertain category, including typos", "statemen"),
    tag("Z", "Punctuation", "\"...\", ?, ."),
];

/// Look up a tag by its code, case-insensitively
pub fn tag_info(code: &str) -> Option<&'static TagInfo> {
    TAGSET.iter().find(|info| info.code.eq_ignore_ascii_case(code))
}
