use japi_derive::japi_error;
use std::borrow::Cow;

#[japi_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Invalid{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::Invalid { message: "x".into(), context: None };
    let _ = format!("{err:?}");
}
