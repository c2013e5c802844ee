//! Summary parsing functionality for converting raw maze descriptions into structured cell records.
//!
//! The export format is loosely formatted and human-edited, so the scanner is
//! forgiving: malformed pieces degrade into [`ParseWarning`]s, never into a
//! failed parse.

use crate::error::ParseWarning;
use crate::map::direction::Direction;
use crate::map::model::{CellId, CellRecord, MazeModel};

/// Result of scanning one maze summary: every cell that could be recovered,
/// plus diagnostics for the lines that could not.
#[derive(Debug, Default)]
pub struct ParsedSummary {
    /// The recovered maze model, in summary order.
    pub model: MazeModel,
    /// Diagnostics for skipped or malformed input, in source order.
    pub warnings: Vec<ParseWarning>,
}

/// Parser for converting raw maze summaries into structured cell records.
pub struct SummaryParser;

impl SummaryParser {
    /// Parses a maze summary into cell records.
    ///
    /// A line whose trimmed form starts with `Floor` opens a record; the
    /// record's detail window is every line up to the next header or the end
    /// of input, and the detail lines within it may appear in any order.
    /// Empty input yields an empty model with no warnings.
    pub fn parse(text: &str) -> ParsedSummary {
        let lines: Vec<&str> = text.lines().collect();
        let mut parsed = ParsedSummary::default();

        let mut cursor = 0;
        while cursor < lines.len() {
            let line = lines[cursor];
            if !is_header(line) {
                cursor += 1;
                continue;
            }

            let Some(id) = parse_header(line) else {
                parsed.warnings.push(ParseWarning::MalformedHeader {
                    line: cursor + 1,
                    content: line.trim().to_owned(),
                });
                // A header we cannot place also invalidates its detail window.
                cursor = skip_window(&lines, cursor + 1);
                continue;
            };

            let header_line = cursor + 1;
            let mut record = CellRecord::new(id);
            let mut saw_detail = false;

            cursor += 1;
            while cursor < lines.len() && !is_header(lines[cursor]) {
                let detail = lines[cursor].trim();
                if detail.starts_with("Walls") {
                    saw_detail = true;
                    parse_walls(detail, cursor + 1, &mut record, &mut parsed.warnings);
                } else if detail.starts_with("TrapDoor") {
                    saw_detail = true;
                    record.trap_door = detail.contains("True");
                } else if detail.starts_with("Stairs") {
                    saw_detail = true;
                    record.stairs = detail.contains("True");
                } else if detail.starts_with("Landmark") {
                    saw_detail = true;
                    record.landmark = detail.contains("True");
                }
                cursor += 1;
            }

            if !saw_detail {
                parsed.warnings.push(ParseWarning::BareCell { line: header_line, id });
            }
            if !parsed.model.push(record) {
                parsed.warnings.push(ParseWarning::DuplicateCell { line: header_line, id });
            }
        }

        parsed
    }
}

/// Whether a line opens a new cell record.
fn is_header(line: &str) -> bool {
    line.trim_start().starts_with("Floor")
}

/// Advances past every line up to the next header or the end of input.
fn skip_window(lines: &[&str], mut cursor: usize) -> usize {
    while cursor < lines.len() && !is_header(lines[cursor]) {
        cursor += 1;
    }
    cursor
}

/// Splits a header such as `Floor 0, Row 3, Col 3:` into its coordinates.
///
/// Extraction is purely textual: strip the trailing colon, split on commas,
/// strip the named token from each piece and parse what remains. A missing
/// colon and extra trailing pieces are tolerated.
fn parse_header(line: &str) -> Option<CellId> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed);

    let mut pieces = trimmed.split(',');
    let floor = coordinate(pieces.next()?, "Floor")?;
    let row = coordinate(pieces.next()?, "Row")?;
    let col = coordinate(pieces.next()?, "Col")?;

    Some(CellId { floor, row, col })
}

/// Strips the named token from one header piece and parses the remainder.
fn coordinate(piece: &str, token: &str) -> Option<u32> {
    piece.trim().strip_prefix(token)?.trim().parse().ok()
}

/// Reads the braced key/value list out of a `Walls` detail line.
///
/// Keys are single letters, possibly quoted; values are the literal tokens
/// `True` and `False`, case-sensitive. Anything that does not fit becomes a
/// warning, and the affected wall keeps its default of absent.
fn parse_walls(line: &str, line_no: usize, record: &mut CellRecord, warnings: &mut Vec<ParseWarning>) {
    let braces = line.find('{').and_then(|open| {
        let close = line[open..].find('}')? + open;
        Some((open, close))
    });
    let Some((open, close)) = braces else {
        warnings.push(ParseWarning::MalformedWalls {
            line: line_no,
            content: line.to_owned(),
        });
        return;
    };

    for pair in line[open + 1..close].split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let Some((key, value)) = pair.split_once(':') else {
            warnings.push(ParseWarning::MalformedWallEntry {
                line: line_no,
                entry: pair.to_owned(),
            });
            continue;
        };

        let key = key.trim().trim_matches(|c: char| c == '\'' || c == '"');
        let Some(dir) = Direction::from_key(key) else {
            warnings.push(ParseWarning::UnknownWallKey {
                line: line_no,
                key: key.to_owned(),
            });
            continue;
        };

        match value.trim() {
            "True" => record.walls.add(dir),
            "False" => {}
            other => warnings.push(ParseWarning::MalformedWallValue {
                line: line_no,
                key: key.to_owned(),
                value: other.to_owned(),
            }),
        }
    }
}
