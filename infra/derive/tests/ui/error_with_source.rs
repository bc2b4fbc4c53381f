use std::borrow::Cow;
use wordnum_derive::wordnum_error;

#[wordnum_error]
pub enum ParseError {
    #[error("Bad numeral{}: {source}", format_context(.context))]
    Numeral { source: std::num::ParseFloatError, context: Option<Cow<'static, str>> },

    #[error("Internal parse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<f64> {
    raw.parse::<f64>().context("parsing numeral")
}

fn main() {
    let err = parse("twelve").unwrap_err();
    assert!(matches!(err, ParseError::Numeral { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Bad numeral (parsing numeral)"));

    let internal: ParseError = "boom".into();
    assert_eq!(internal.to_string(), "Internal parse error: boom");
}
