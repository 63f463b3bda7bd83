pub(crate) fn sample_lexicon() -> Vec<String> {
    [
        "cat a small feline",
        "dog a loyal animal",
        "cat wildcat relative",
        "bird",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect::<Vec<_>>()
}
