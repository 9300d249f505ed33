//! Parse SVG path data into [`PathData`] using the pest grammar in `path.pest`.

use glam::DVec2;
use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

use crate::errors::PathParseError;
use crate::path::{PathCommand, PathData};
use crate::types::Point;

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathParser;

const SOURCE_NAME: &str = "<path>";

/// Parse path data such as `M 244.5 144.5 C ... Z`.
pub fn parse_path(source: &str) -> Result<PathData, PathParseError> {
    let pairs = PathParser::parse(Rule::path, source).map_err(|e| syntax_error(source, e))?;

    let mut data = PathData::new();
    for path in pairs {
        for subpath in path.into_inner() {
            if subpath.as_rule() != Rule::subpath {
                continue;
            }
            for command in subpath.into_inner() {
                data.push(parse_command(source, command)?);
            }
        }
    }
    Ok(data)
}

fn parse_command(source: &str, pair: Pair<Rule>) -> Result<PathCommand, PathParseError> {
    let rule = pair.as_rule();
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    match rule {
        Rule::move_to => Ok(PathCommand::MoveTo(next_point(source, &mut inner, span)?)),
        Rule::cubic_to => {
            let cp1 = next_point(source, &mut inner, span)?;
            let cp2 = next_point(source, &mut inner, span)?;
            let end = next_point(source, &mut inner, span)?;
            Ok(PathCommand::CubicTo { cp1, cp2, end })
        }
        Rule::close => Ok(PathCommand::Close),
        other => Err(PathParseError::Syntax {
            expected: format!("path command, found {:?}", other),
            src: named_source(source),
            span: to_span(span.start(), span.end()),
        }),
    }
}

fn next_point(source: &str, inner: &mut Pairs<Rule>, outer: pest::Span) -> Result<Point, PathParseError> {
    let pair = inner.next().ok_or_else(|| PathParseError::Syntax {
        expected: "coordinate pair".to_string(),
        src: named_source(source),
        span: to_span(outer.end(), outer.end()),
    })?;
    let pair_span = pair.as_span();
    let mut numbers = pair.into_inner();
    let mut coordinate = || -> Result<f64, PathParseError> {
        let number = numbers.next().ok_or_else(|| PathParseError::Syntax {
            expected: "number".to_string(),
            src: named_source(source),
            span: to_span(pair_span.end(), pair_span.end()),
        })?;
        parse_number(source, number)
    };
    let x = coordinate()?;
    let y = coordinate()?;
    Ok(DVec2::new(x, y))
}

fn parse_number(source: &str, pair: Pair<Rule>) -> Result<f64, PathParseError> {
    let text = pair.as_str();
    let span = pair.as_span();
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PathParseError::InvalidNumber {
            text: text.to_string(),
            src: named_source(source),
            span: to_span(span.start(), span.end()),
        }),
    }
}

fn syntax_error(source: &str, err: pest::error::Error<Rule>) -> PathParseError {
    let (start, end) = match err.location {
        InputLocation::Pos(pos) => (pos, pos),
        InputLocation::Span((start, end)) => (start, end),
    };
    let expected = match &err.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => positives
            .iter()
            .map(describe_rule)
            .collect::<Vec<_>>()
            .join(" or "),
        ErrorVariant::ParsingError { .. } => "end of input".to_string(),
        ErrorVariant::CustomError { message } => message.clone(),
    };
    PathParseError::Syntax {
        expected,
        src: named_source(source),
        span: to_span(start, end),
    }
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::number => "number".to_string(),
        Rule::pair => "coordinate pair".to_string(),
        Rule::move_to | Rule::subpath => "`M`".to_string(),
        Rule::cubic_to => "`C`".to_string(),
        Rule::close => "`Z`".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{:?}", other),
    }
}

fn named_source(source: &str) -> NamedSource<String> {
    NamedSource::new(SOURCE_NAME, source.to_string())
}

fn to_span(start: usize, end: usize) -> SourceSpan {
    (start, end.saturating_sub(start)).into()
}
