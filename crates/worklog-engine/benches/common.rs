// Benchmark helpers live beside the bench files that use them
#[allow(dead_code)]
pub fn generate_report(sections: usize) -> String {
    let base = "## Project\n\nSummary with **bold** text and a [link](https://example.com).\n\n- Fixed `parser` edge case\n- Added tests\n1. First step\n> Note for reviewers\n\n```ts\nconst value = compute();\n```\n\n---\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_long_code(chars: usize) -> String {
    let mut content = String::from("```rust\n");
    while content.len() < chars {
        content.push_str("fn example() { println!(\"Hello\"); }\n");
    }
    content.push_str("```\n");
    content
}
