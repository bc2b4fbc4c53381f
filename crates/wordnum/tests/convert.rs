use wordnum::{
    CompileError, Conversion, Converter, Error, Language, Options, Region, SubRegion, Token,
    TokenClass,
};

fn unit(literal: &str) -> SubRegion {
    SubRegion::single(Token::new(TokenClass::Unit, literal))
}

fn ten(literal: &str) -> SubRegion {
    SubRegion::single(Token::new(TokenClass::Ten, literal))
}

#[test]
fn converts_german_text() {
    let text = "ich habe zwanzig und drei Äpfel";
    let regions = [Region::new(9, 15, vec![ten("zwanzig")]), Region::new(21, 24, vec![unit("drei")])];

    let converter = Converter::builder().language(Language::German).build();
    let result = converter.convert(&regions, text).unwrap();
    assert_eq!(result, Conversion::Text("ich habe 20 und 3 Äpfel".to_owned()));
}

#[test]
fn output_shape_follows_options() {
    let text = "drie en twintig";
    let regions = [Region::new(0, 3, vec![unit("drie")]), Region::new(8, 14, vec![ten("twintig")])];
    let dutch = Options::new(Language::Dutch);

    let numbers = Converter::new(dutch.numbers_only(true)).convert(&regions, text).unwrap();
    assert_eq!(numbers, Conversion::Numbers(vec![3.0, 20.0]));

    let glued = Converter::new(dutch.one_number(true)).convert(&regions, text).unwrap();
    assert_eq!(glued, Conversion::Number(320.0));

    let replaced = Converter::new(dutch).convert(&regions, text).unwrap();
    assert_eq!(replaced.to_string(), "3 en 20");
}

#[test]
fn compile_failures_surface_through_the_facade() {
    let text = "twenty";
    let region = Region::new(0, 5, vec![unit("twintig")]);

    let err = Converter::default().convert(&[region], text).unwrap_err();
    assert!(
        matches!(err, Error::Compile { source: CompileError::UnresolvedLiteral { .. }, .. }),
        "{err}"
    );
}
