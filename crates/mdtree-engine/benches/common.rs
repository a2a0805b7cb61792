// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and a [link](https://example.com).\n\n- Bullet point\n- Another item\n- [x] Done task\n- [ ] Open task\n1. First\n2. Second\n> A quoted ~~line~~\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// One long paragraph dense with inline markers, to stress the inline passes.
#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "plain **bold** `code` [a](b) ~~x~~ *i* [unclosed "
        .repeat(repeats)
}
