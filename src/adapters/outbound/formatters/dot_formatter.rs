use crate::org_chart::domain::{ChartMetadata, VisualizationModel, NO_TEAM};
use crate::ports::outbound::ChartFormatter;
use crate::shared::Result;
use chrono::SecondsFormat;
use std::fmt::Write;

/// DotFormatter adapter rendering the chart as Graphviz DOT source
///
/// Layout:
/// - one node per team (`team:<name>`)
/// - teams with members get a `cluster_N` subgraph holding the team node and
///   one node per member (`<team>/<login>`, since a login may be in many teams)
/// - solid `parent -> child` edges for the hierarchy
/// - dashed `subset -> superset` edges for roster containment
///
/// Output depends only on the model and metadata, so two runs over the same
/// directory state produce identical text apart from the timestamp line.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn team_id(team: &str) -> String {
        quote(&format!("team:{}", team))
    }

    fn member_id(team: &str, member: &str) -> String {
        quote(&format!("{}/{}", team, member))
    }

    fn write_header(out: &mut String, metadata: &ChartMetadata) -> std::fmt::Result {
        writeln!(
            out,
            "// generated by {} {} at {}",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata
                .generated_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        writeln!(out, "digraph {} {{", quote(metadata.organization()))?;
        writeln!(out, "  graph [rankdir=LR, compound=true];")?;
        writeln!(out, "  node [shape=box, style=rounded];")
    }

    fn write_teams(out: &mut String, model: &VisualizationModel) -> std::fmt::Result {
        for (index, (team, members)) in model.teams().iter().enumerate() {
            let team_node = format!(
                "{} [label={}, shape=folder]",
                Self::team_id(team),
                quote(team)
            );

            if members.is_empty() {
                writeln!(out)?;
                writeln!(out, "  {};", team_node)?;
                continue;
            }

            writeln!(out)?;
            writeln!(out, "  subgraph \"cluster_{}\" {{", index)?;
            writeln!(out, "    label={};", quote(team))?;
            if team == NO_TEAM && !model.members_without_team().is_empty() {
                writeln!(out, "    style=dashed;")?;
            }
            writeln!(out, "    {};", team_node)?;
            for member in members {
                writeln!(
                    out,
                    "    {} [label={}];",
                    Self::member_id(team, member),
                    quote(member)
                )?;
            }
            writeln!(out, "  }}")?;
        }
        Ok(())
    }

    fn write_hierarchy(out: &mut String, model: &VisualizationModel) -> std::fmt::Result {
        if model.parents().is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "  // hierarchy")?;
        for (child, parent) in model.parents() {
            writeln!(
                out,
                "  {} -> {};",
                Self::team_id(parent),
                Self::team_id(child)
            )?;
        }
        Ok(())
    }

    fn write_subsets(out: &mut String, model: &VisualizationModel) -> std::fmt::Result {
        if model.subsets().is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "  // subsets")?;
        for (team, superset) in model.subsets().pairs() {
            writeln!(
                out,
                "  {} -> {} [style=dashed, label=\"subset of\"];",
                Self::team_id(team),
                Self::team_id(superset)
            )?;
        }
        Ok(())
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartFormatter for DotFormatter {
    fn format(&self, model: &VisualizationModel, metadata: &ChartMetadata) -> Result<String> {
        let mut out = String::new();

        Self::write_header(&mut out, metadata)?;
        Self::write_teams(&mut out, model)?;
        Self::write_hierarchy(&mut out, model)?;
        Self::write_subsets(&mut out, model)?;
        writeln!(out, "}}")?;

        Ok(out)
    }
}

/// Quotes a DOT identifier
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
