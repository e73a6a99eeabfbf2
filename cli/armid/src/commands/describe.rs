//! Describe command.

use anyhow::Result;
use armid::ResourceIdSchema;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{display_option, print_output, print_single, OutputFormat};

use super::CommandContext;

/// Show the segments of one kind.
#[derive(Debug, Args)]
pub struct DescribeCommand {
    /// Kind to describe.
    kind: String,
}

#[derive(Debug, Serialize, Tabled)]
struct SegmentRow {
    #[tabled(rename = "#")]
    position: usize,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Kind")]
    kind: String,

    #[tabled(rename = "Literal", display = "display_option")]
    literal: Option<String>,

    #[tabled(rename = "Example")]
    example: String,
}

impl DescribeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let schema = ctx.schema(&self.kind)?;

        match ctx.format {
            OutputFormat::Json => print_single(schema),
            OutputFormat::Table => {
                println!("{}", schema.description().bold());
                println!("{}", schema.template());
                println!("{} {}", "Example:".dimmed(), schema.example_id());
                print_output(&segment_rows(schema), ctx.format);
            }
        }

        Ok(())
    }
}

fn segment_rows(schema: &ResourceIdSchema) -> Vec<SegmentRow> {
    schema
        .segments()
        .iter()
        .enumerate()
        .map(|(position, segment)| SegmentRow {
            position,
            name: segment.name().to_string(),
            kind: segment.kind().to_string(),
            literal: segment.literal().map(str::to_string),
            example: segment.example().to_string(),
        })
        .collect()
}
