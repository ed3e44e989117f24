use preprocess::{normalize, registry, ArticleIn};
use std::fs;

fn main() {
    let file_path = "crates/preprocess/examples/sample_article.txt";
    let content = fs::read_to_string(file_path).expect("file path invalid");
    let source = std::env::args().nth(1).unwrap_or_else(|| "mint".to_string());

    let outcome = normalize(ArticleIn::new("Demo article", content, "", source));
    println!("status: {} ({})", outcome.status_code, outcome.status_message);
    println!();
    println!("content: {}", outcome.content);
    println!();
    let sources = registry().expect("builtin registry compiles").sources();
    println!("registered sources: {sources:?}");
}
