//! Subcommand implementations

use anyhow::{Context as _, Result};
use serde_json::{json, Value};
use std::cmp::Ordering;

use sem_version::{Comparator, Constraint, Version, VersionParser, split_constraint};

use crate::config::OutputFormat;

/// Settings shared by every subcommand
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub loose: bool,
}

impl Context {
    fn read_version(&self, input: &str) -> Result<Version> {
        let parsed = if self.loose {
            Version::parse_loose(input)
        } else {
            Version::from_string(input)
        };
        parsed.with_context(|| format!("Could not parse version \"{}\"", input))
    }

    fn emit(&self, text: impl std::fmt::Display, value: Value) {
        match self.format {
            OutputFormat::Text => println!("{}", text),
            OutputFormat::Json => println!("{}", value),
        }
    }
}

pub fn parse(ctx: &Context, input: &str) -> Result<i32> {
    let version = ctx.read_version(input)?;

    let mut text = format!(
        "major: {}\nminor: {}\npatch: {}",
        version.major(),
        version.minor(),
        version.patch()
    );
    if let Some(pre) = version.pre() {
        text.push_str(&format!("\npre: {}", pre));
    }
    if let Some(build) = version.build() {
        text.push_str(&format!("\nbuild: {}", build));
    }

    ctx.emit(text, Value::Object(version.to_map()));
    Ok(0)
}

pub fn valid(ctx: &Context, input: &str) -> Result<i32> {
    let is_valid = if ctx.loose {
        VersionParser::new().parse_loose(input).is_ok()
    } else {
        VersionParser::new().is_valid(input)
    };

    ctx.emit(
        if is_valid { "valid" } else { "invalid" },
        json!({ "version": input, "valid": is_valid }),
    );
    Ok(if is_valid { 0 } else { 1 })
}

pub fn compare(ctx: &Context, left: &str, right: &str) -> Result<i32> {
    let left = ctx.read_version(left)?;
    let right = ctx.read_version(right)?;

    let (symbol, number) = match Comparator::compare(&left, &right) {
        Ordering::Less => ("<", -1),
        Ordering::Equal => ("=", 0),
        Ordering::Greater => (">", 1),
    };

    ctx.emit(
        format!("{} {} {}", left, symbol, right),
        json!({ "left": left, "right": right, "result": number }),
    );
    Ok(0)
}

pub fn satisfies(ctx: &Context, input: &str, constraint: &str) -> Result<i32> {
    let version = ctx.read_version(input)?;
    let constraint = Constraint::parse(constraint)
        .with_context(|| format!("Invalid constraint \"{}\"", constraint))?;
    let result = constraint.matches(&version);

    ctx.emit(
        result,
        json!({ "version": version, "constraint": constraint.to_string(), "satisfies": result }),
    );
    Ok(if result { 0 } else { 1 })
}

pub fn split(ctx: &Context, constraint: &str) -> Result<i32> {
    let (operator, spec) = split_constraint(constraint);
    let open = operator != "=";

    ctx.emit(
        format!("{}\t{}\t{}", operator, spec, if open { "open" } else { "closed" }),
        json!({ "operator": operator, "version": spec, "open": open }),
    );
    Ok(0)
}

pub fn sort(ctx: &Context, inputs: &[String], reverse: bool) -> Result<i32> {
    let mut versions = inputs
        .iter()
        .map(|input| ctx.read_version(input))
        .collect::<Result<Vec<_>>>()?;

    versions.sort();
    if reverse {
        versions.reverse();
    }

    let text = versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    ctx.emit(text, json!(versions));
    Ok(0)
}
