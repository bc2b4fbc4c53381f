mod fixtures;

use proptest::prelude::*;
use wordnum_compiler::{Compiler, Conversion, format_numeral, parse_numeral};
use wordnum_domain::{Language, Options, Region, SubRegion, Token, TokenClass};

const UNITS: [(&str, f64); 10] = [
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
];

const SCALES: [(&str, f64); 4] =
    [("hundred", 1e2), ("thousand", 1e3), ("million", 1e6), ("billion", 1e9)];

/// Builds `words` joined by `" and "`, one region per word.
fn sentence(indices: &[usize]) -> (String, Vec<Region>) {
    let mut text = String::new();
    let mut regions = Vec::with_capacity(indices.len());

    for (position, &index) in indices.iter().enumerate() {
        if position > 0 {
            text.push_str(" and ");
        }
        let (word, _) = UNITS[index];
        let start = text.chars().count();
        text.push_str(word);
        let sub_region = SubRegion::single(Token::new(TokenClass::Unit, word));
        regions.push(Region::new(start, start + word.len() - 1, vec![sub_region]));
    }

    (text, regions)
}

proptest! {
    #[test]
    fn scale_word_multiplies_at_least_one(unit in 0..UNITS.len(), scale in 0..SCALES.len()) {
        let (unit_word, unit_value) = UNITS[unit];
        let (scale_word, scale_value) = SCALES[scale];
        let sub_region = fixtures::run(Language::English, &format!("{unit_word} {scale_word}"));

        let value = Compiler::for_language(Language::English).resolve(&sub_region, false).unwrap();
        prop_assert_eq!(value.sum, unit_value.max(1.0) * scale_value);
        prop_assert!(!value.decimal);
    }

    #[test]
    fn replacement_matches_joined_numerals(indices in proptest::collection::vec(0..UNITS.len(), 2..8)) {
        let (text, regions) = sentence(&indices);
        let expected = indices.iter().map(|&i| format_numeral(UNITS[i].1)).collect::<Vec<_>>().join(" and ");

        let result = Compiler::for_language(Language::English)
            .assemble(&regions, &text, &Options::default())
            .unwrap();
        prop_assert_eq!(result, Conversion::Text(expected));
    }

    #[test]
    fn numbers_only_matches_compile(indices in proptest::collection::vec(0..UNITS.len(), 1..8)) {
        let (text, regions) = sentence(&indices);
        let compiler = Compiler::for_language(Language::English);

        let expected: Vec<f64> = regions.iter().map(|region| compiler.compile(region).unwrap()).collect();
        let result = compiler.assemble(&regions, &text, &Options::default().numbers_only(true)).unwrap();
        prop_assert_eq!(result, Conversion::Numbers(expected));
    }

    #[test]
    fn numerals_read_back_exactly(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let numeral = format_numeral(value);
        let parsed = parse_numeral(&numeral).unwrap();
        prop_assert!(parsed == value, "{} read back as {}", numeral, parsed);
    }
}
