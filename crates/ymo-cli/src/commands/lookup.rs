use std::path::PathBuf;

use ymo_i18n::Translator;

use super::table_loader::{fail, read_table_bytes};

pub struct LookupArgs {
    pub table_path: PathBuf,
    pub text: String,
    pub context: Option<String>,
}

pub fn run(args: LookupArgs) {
    let bytes = match read_table_bytes(&args.table_path) {
        Ok(bytes) => bytes,
        Err(e) => fail(e),
    };
    let translator = Translator::from_bytes(&bytes);
    println!("{}", translate(&translator, &args.text, args.context.as_deref()));
}

pub fn translate<'a>(translator: &'a Translator, text: &'a str, context: Option<&str>) -> &'a str {
    match context {
        Some(ctx) => translator.resolve_in_context(ctx, text),
        None => translator.resolve(text),
    }
}
