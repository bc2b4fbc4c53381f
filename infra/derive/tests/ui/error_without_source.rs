use std::borrow::Cow;
use wordnum_derive::wordnum_error;

#[wordnum_error]
#[derive(Debug)]
pub enum ShapeError {
    #[error("Expected {expected} tokens, found {found}{}", format_context(.context))]
    Arity { expected: usize, found: usize, context: Option<Cow<'static, str>> },

    #[error("Unclassified word '{word}'")]
    Unclassified { word: String },
}

fn check(found: usize) -> Result<()> {
    if found == 1 {
        Ok(())
    } else {
        Err(ShapeError::Arity { expected: 1, found, context: None })
    }
}

fn main() {
    let err = check(2).context("unit run").unwrap_err();
    assert_eq!(err.to_string(), "Expected 1 tokens, found 2 (unit run)");

    let plain = ShapeError::Unclassified { word: "zebra".to_owned() };
    let same = Err::<(), _>(plain).context("ignored").unwrap_err();
    assert_eq!(same.to_string(), "Unclassified word 'zebra'");
}
