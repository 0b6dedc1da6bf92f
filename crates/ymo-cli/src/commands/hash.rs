use ymo_core::{context_key, key_hash};

pub struct HashArgs {
    pub text: String,
    pub context: Option<String>,
}

pub fn run(args: HashArgs) {
    println!("{}", render(&args.text, args.context.as_deref()));
}

pub fn render(text: &str, context: Option<&str>) -> String {
    let hash = match context {
        Some(ctx) => key_hash(&context_key(ctx, text)),
        None => key_hash(text),
    };
    format!("0x{hash:08x}")
}
