// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Best-effort splitting of free-text person names.
//!
//! Handles the orderings corrections sites actually publish: `LAST,FIRST
//! MIDDLE`, `Last, Suffix, First`, and plain `First Middle Last Suffix`, with
//! leading titles and lower-case particles such as `van` or `de la`. Names
//! outside those shapes still parse, just not always the way a human would.

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "mx", "dr", "rev", "fr", "sir", "hon", "prof", "sister", "brother",
];

const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "v", "vi", "2nd", "3rd", "4th", "esq", "phd", "md",
];

const PARTICLES: &[&str] = &[
    "da", "das", "de", "del", "della", "den", "der", "di", "do", "dos", "du", "la", "le", "st",
    "ste", "san", "santa", "ter", "van", "von", "bin", "ibn", "al", "el",
];

/// Components of a parsed name. Missing components are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanName {
    pub title: String,
    pub first: String,
    pub middle: String,
    pub last: String,
    pub suffix: String,
}

fn normalize(piece: &str) -> String {
    piece.replace('.', "").to_lowercase()
}

fn is_title(piece: &str) -> bool {
    TITLES.contains(&normalize(piece).as_str())
}

fn is_suffix(piece: &str) -> bool {
    SUFFIXES.contains(&normalize(piece).as_str())
}

// A lone `V` among given names is far more often a middle initial.
fn is_given_suffix(piece: &str) -> bool {
    is_suffix(piece) && normalize(piece).len() > 1
}

fn is_particle(piece: &str) -> bool {
    PARTICLES.contains(&normalize(piece).as_str())
}

fn words(part: &str) -> Vec<&str> {
    part.split_whitespace().collect()
}

fn all_suffixes(part: &str) -> bool {
    let pieces = words(part);
    !pieces.is_empty() && pieces.iter().all(|p| is_suffix(p))
}

/// Moves leading titles out of `pieces`, always leaving at least one piece.
fn take_titles<'a>(pieces: &mut Vec<&'a str>) -> Vec<&'a str> {
    let mut titles = Vec::new();
    while pieces.len() > 1 && is_title(pieces[0]) {
        titles.push(pieces.remove(0));
    }
    titles
}

/// Moves trailing suffixes out of `pieces`, always leaving at least one piece.
fn take_suffixes<'a>(pieces: &mut Vec<&'a str>, accept: fn(&str) -> bool) -> Vec<&'a str> {
    let mut suffixes = Vec::new();
    while pieces.len() > 1 && pieces.last().is_some_and(|p| accept(p)) {
        if let Some(piece) = pieces.pop() {
            suffixes.insert(0, piece);
        }
    }
    suffixes
}

impl HumanName {
    pub fn parse(full_name: &str) -> Self {
        let parts: Vec<&str> = full_name
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [] => Self::default(),
            [single] => Self::from_plain(words(single), Vec::new()),
            // "John Smith, Jr." is plain ordering with a detached suffix
            [given, rest @ ..] if rest.iter().all(|p| all_suffixes(p)) => {
                let suffixes = rest.iter().flat_map(|p| words(p)).collect();
                Self::from_plain(words(given), suffixes)
            }
            [last, rest @ ..] => Self::from_last_first(last, rest),
        }
    }

    fn from_plain(mut pieces: Vec<&str>, detached_suffixes: Vec<&str>) -> Self {
        let titles = take_titles(&mut pieces);
        let mut suffixes = take_suffixes(&mut pieces, is_suffix);
        suffixes.extend(detached_suffixes);

        let mut name = HumanName {
            title: titles.join(" "),
            suffix: suffixes.join(", "),
            ..Default::default()
        };

        match pieces.len() {
            0 => {}
            1 => name.first = pieces[0].to_string(),
            len => {
                // particles never swallow the first name
                let mut last_start = len - 1;
                while last_start > 1 && is_particle(pieces[last_start - 1]) {
                    last_start -= 1;
                }
                name.first = pieces[0].to_string();
                name.middle = pieces[1..last_start].join(" ");
                name.last = pieces[last_start..].join(" ");
            }
        }

        name
    }

    fn from_last_first(last: &str, rest: &[&str]) -> Self {
        let mut last_pieces = words(last);
        let titles = take_titles(&mut last_pieces);
        let mut suffixes = take_suffixes(&mut last_pieces, is_suffix);

        let mut given = Vec::new();
        for part in rest {
            if all_suffixes(part) {
                suffixes.extend(words(part));
            } else {
                given.extend(words(part));
            }
        }

        let mut titles = [titles, take_titles(&mut given)].concat();
        if given.len() == 1 && is_title(given[0]) {
            titles.extend(given.drain(..));
        }
        suffixes.extend(take_suffixes(&mut given, is_given_suffix));

        HumanName {
            title: titles.join(" "),
            first: given.first().map(|p| p.to_string()).unwrap_or_default(),
            middle: given.iter().skip(1).copied().collect::<Vec<_>>().join(" "),
            last: last_pieces.join(" "),
            suffix: suffixes.join(", "),
        }
    }

    /// Given names and surname joined back together, without title or suffix.
    pub fn full(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "name_parser_test.rs"]
mod tests;
