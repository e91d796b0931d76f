//! Line-oriented `key = value` redirection file

use getpath_types::MAX_PATH_LEN;

/// Look up `key` in the contents of a redirection file.
///
/// A line matches when its first whitespace-separated token is `key` and
/// the next one is a lone `=`. The value is the rest of the line with
/// surrounding whitespace trimmed, so it may contain spaces. Comment
/// lines (`#`), lines that are not valid UTF-8 and lines longer than
/// [`MAX_PATH_LEN`] are skipped. The first match wins.
#[must_use]
pub fn find_config_value(contents: &[u8], key: &str) -> Option<String> {
    contents
        .split(|&b| b == b'\n')
        .filter(|line| line.len() <= MAX_PATH_LEN)
        .filter(|line| line.first() != Some(&b'#'))
        .filter_map(|line| std::str::from_utf8(line).ok())
        .find_map(|line| line_value(line, key).map(str::to_string))
}

fn line_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let (name, rest) = line.trim_start().split_once(char::is_whitespace)?;
    if name != key {
        return None;
    }
    let value = rest.trim_start().strip_prefix('=')?;
    if !value.starts_with(char::is_whitespace) {
        return None;
    }
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
