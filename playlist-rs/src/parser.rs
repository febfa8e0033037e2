use std::{
    collections::HashMap,
    error::Error,
    fmt::Display,
    io::{self, BufRead},
    mem::take,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::{SmolStr, format_smolstr};

use crate::format::{DEFAULT_NAME, M3uPlaylist, PlaylistEntry, directives};

#[derive(Debug)]
pub enum ParseError {
    IoError(io::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => e.fmt(f),
        }
    }
}
impl Error for ParseError {}
impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

lazy_static! {
    /// From `https://github.com/Raiper34/m3u-parser-generator/blob/c8e479161dcc4ec3d5490631fa42a1647741481d/src/m3u-parser.ts#L52` (Modified)
    static ref ATTRIBUTE_REGEX: Regex = Regex::new("([^ ]*?)=\"(.*?)\"").expect("Regular expression error");
    static ref LOCATION_REGEX: Regex = Regex::new(r"^(?i:https?)://\S").expect("Regular expression error");
}

pub(crate) fn parse_attributes(input: impl AsRef<str>) -> HashMap<SmolStr, SmolStr> {
    let mut result = HashMap::new();
    for (_, [key, value]) in ATTRIBUTE_REGEX
        .captures_iter(input.as_ref())
        .map(|x| x.extract())
    {
        result.insert(key.into(), value.into());
    }

    result
}

/// Whether `line` is something we can hand to a player as-is
pub fn is_media_location(line: impl AsRef<str>) -> bool {
    let line = line.as_ref();
    !line.starts_with(directives::COMMENT) && LOCATION_REGEX.is_match(line)
}

/// Splits the body of an `#EXTINF:` line at its last comma that is not inside
/// a quoted attribute value. Only a quote right after `=` opens a value.
fn split_title(value: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    let mut last_comma = None;
    let mut previous = None;
    for (index, ch) in value.char_indices() {
        match ch {
            '"' if in_quotes => in_quotes = false,
            '"' if previous == Some('=') => in_quotes = true,
            ',' if !in_quotes => last_comma = Some(index),
            _ => {}
        }
        previous = Some(ch);
    }

    match last_comma {
        Some(index) => (&value[..index], Some(&value[index + 1..])),
        None => (value, None),
    }
}

/// Scans M3U text line by line.
///
/// Every `http`/`https` line becomes an entry named by the closest `#EXTINF`
/// line above it. Everything else is skipped, so the parser never rejects a
/// playlist because of its content.
pub struct Parser<T: BufRead> {
    reader: T,
    buffer: String,
    playlist: M3uPlaylist,
    entry: PlaylistEntry,
}

impl<T: BufRead> Parser<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            buffer: String::new(),
            playlist: M3uPlaylist::default(),
            entry: PlaylistEntry::default(),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }

            if !self.buffer.trim().is_empty() {
                return Ok(Some(self.buffer.trim().to_owned()));
            }
        }
    }

    pub fn parse(&mut self) -> Result<(), ParseError> {
        while let Some(line) = self.next_line()? {
            scan_line(&mut self.playlist, &mut self.entry, &line);
        }

        Ok(())
    }

    pub fn get_result(&mut self) -> M3uPlaylist {
        self.entry = PlaylistEntry::default();
        take(&mut self.playlist)
    }
}

/// Parses playlist text that is already in memory.
pub fn parse_str(input: impl AsRef<str>) -> M3uPlaylist {
    let mut playlist = M3uPlaylist::default();
    let mut entry = PlaylistEntry::default();
    for line in input.as_ref().lines().map(str::trim).filter(|x| !x.is_empty()) {
        scan_line(&mut playlist, &mut entry, line);
    }

    playlist
}

fn scan_line(playlist: &mut M3uPlaylist, entry: &mut PlaylistEntry, line: &str) {
    if let Some(value) = line.strip_prefix(directives::EXTINF) {
        // a later tag replaces whatever an earlier one declared
        *entry = parse_media_info(value, playlist.len());
    } else if line.starts_with(directives::EXTM3U) {
        let attributes = line[directives::EXTM3U_LEN..].trim_start();
        playlist.attributes.extend(parse_attributes(attributes));
    } else if is_media_location(line) {
        let mut media = take(entry);
        media.location = SmolStr::new(line);
        playlist.entries.push(media);
    }
}

fn parse_media_info(value: &str, parsed: usize) -> PlaylistEntry {
    let (head, title) = split_title(value);
    let head = head.trim();

    let mut entry = PlaylistEntry::default();
    entry.duration = head
        .split_whitespace()
        .next()
        .and_then(|x| x.parse().ok());
    entry.attributes = parse_attributes(head);

    let title = title.map(str::trim).filter(|x| !x.is_empty());
    let tvg_name = entry
        .attribute("tvg-name")
        .map(str::trim)
        .filter(|x| !x.is_empty());

    entry.name = match title.or(tvg_name) {
        Some(name) => name.into(),
        None => format_smolstr!("{} {}", DEFAULT_NAME, parsed + 1),
    };

    entry
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::{Parser, parse_str, parser::parse_attributes};

    fn names(input: &str) -> Vec<String> {
        parse_str(input)
            .entries
            .iter()
            .map(|x| x.name.to_string())
            .collect()
    }

    #[test]
    fn test_parse_attributes() {
        let result = parse_attributes("HELLO=\"WORLD\" FOO=\"BAR\"");
        assert!(result.contains_key("HELLO"));
        assert_eq!(result.get("FOO").unwrap(), "BAR");
        assert!(!result.contains_key("NOT_FOUND"));
    }

    #[test]
    fn test_parse_two_channels() {
        let result = parse_str(
            "#EXTINF:-1,Channel One\nhttp://a.test/1\n#EXTINF:-1,Channel Two\nhttp://a.test/2\n",
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result.entries[0].name, "Channel One");
        assert_eq!(result.entries[0].location, "http://a.test/1");
        assert_eq!(result.entries[1].name, "Channel Two");
        assert_eq!(result.entries[1].location, "http://a.test/2");
    }

    #[test]
    fn test_parse_list() {
        let data = r#"
#EXTM3U x-tvg-url="test"

#EXTINF:1 tvg-id="a" provider-type="iptv",A
http://example.com/A.m3u8

#EXTINF:2 tvg-id="b" provider-type="iptv",B
http://example.com/B.m3u8

#EXTINF:3 tvg-id="c" provider-type="iptv",C
https://example.com/C.m3u8

#EXTINF:4 tvg-id="d" provider-type="iptv",D
http://example.com/D.m3u8
"#;
        let mut parser = Parser::new(Cursor::new(data));
        parser.parse().unwrap();
        let result = parser.get_result();

        assert_eq!(result.attributes.get("x-tvg-url").unwrap(), "test");
        assert_eq!(result.len(), 4);
        assert_eq!(result.get(1).unwrap().name, "B");
        assert_eq!(result.get(2).unwrap().duration, Some(3.0));
        assert_eq!(
            result.get(2).unwrap().attribute("provider-type"),
            Some("iptv")
        );
        assert_eq!(result.get(3).unwrap().location, "http://example.com/D.m3u8");
    }

    #[test]
    fn test_location_without_extinf() {
        let result = parse_str("#EXTM3U\nhttp://a.test/1\n#EXTINF:-1,Named\nhttp://a.test/2");
        assert_eq!(result.len(), 2);
        assert_eq!(result.entries[0].name, "Stream");
        assert_eq!(result.entries[1].name, "Named");
    }

    #[test]
    fn test_consecutive_extinf_last_wins() {
        assert_eq!(
            names("#EXTINF:-1,First\n#EXTINF:-1,Second\nhttp://a.test/1"),
            vec!["Second"]
        );
    }

    #[test]
    fn test_name_resets_after_entry() {
        assert_eq!(
            names("#EXTINF:-1,Named\nhttp://a.test/1\nhttp://a.test/2"),
            vec!["Named", "Stream"]
        );
    }

    #[test]
    fn test_tvg_name_fallback() {
        assert_eq!(
            names("#EXTINF:-1 tvg-name=\"From Attribute\"\nhttp://a.test/1"),
            vec!["From Attribute"]
        );
        assert_eq!(
            names("#EXTINF:-1 tvg-name=\"From Attribute\",  \nhttp://a.test/1"),
            vec!["From Attribute"]
        );
    }

    #[test]
    fn test_numbered_placeholder() {
        assert_eq!(
            names("#EXTINF:-1,A\nhttp://a.test/1\n#EXTINF:-1\nhttp://a.test/2\n#EXTINF:\nhttp://a.test/3"),
            vec!["A", "Stream 2", "Stream 3"]
        );
    }

    #[test]
    fn test_title_after_last_comma() {
        assert_eq!(
            names("#EXTINF:-1 group-title=\"News, Local\" tvg-name=\"x\",Local News\nhttp://a.test/1"),
            vec!["Local News"]
        );
        assert_eq!(
            names("#EXTINF:-1,Part, Two\nhttp://a.test/1"),
            vec!["Two"]
        );
        // the only commas are quoted, so there is no title
        assert_eq!(
            names("#EXTINF:-1 tvg-name=\"A, B\"\nhttp://a.test/1"),
            vec!["A, B"]
        );
    }

    #[test]
    fn test_stray_quote_keeps_title() {
        assert_eq!(
            names("#EXTINF:-1 tvg-name=\"The 7\" Show\",Real Title\nhttp://a.test/1"),
            vec!["Real Title"]
        );
        assert_eq!(
            names("#EXTINF:-1 \"quoted,\" tvg-id=\"x\",Title\nhttp://a.test/1"),
            vec!["Title"]
        );
    }

    #[test]
    fn test_skips_non_http_lines() {
        let result = parse_str(
            "#EXTM3U\n#EXTVLCOPT:http-user-agent=x\nsegment.ts\nrtmp://a.test/live\n#http://a.test/c\n  https://a.test/ok  \r\n",
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.entries[0].location, "https://a.test/ok");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_str("").is_empty());
        assert!(parse_str("\n\n   \n").is_empty());
    }

    #[test]
    fn test_parser_matches_parse_str() {
        let data = "#EXTINF:-1,A\r\nhttp://a.test/1\r\n\r\nhttp://a.test/2\r\n";
        let mut parser = Parser::new(Cursor::new(data));
        parser.parse().unwrap();
        assert_eq!(parser.get_result(), parse_str(data));
    }
}
