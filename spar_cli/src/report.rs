//! Plain-text rendering of a ranking report.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use spar_core::candidates::ParsedCandidates;
use spar_core::RankedReport;

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

/// Render the bending summary, results table, and recommendation.
///
/// `parsed` is the tube list the report was ranked from; it maps rejected
/// tubes back to their input lines.
#[must_use]
pub fn render_report(report: &RankedReport, parsed: &ParsedCandidates, generated: DateTime<Utc>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail, so the fmt::Results below are discarded
    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out, "  WING SPAR SIZING");
    let _ = writeln!(out, "═══════════════════════════════════════");
    let _ = writeln!(out, "Generated: {}", generated.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out);

    let _ = writeln!(out, "Wing Bending Summary:");
    let _ = writeln!(out, "  Weight (N):           {:.2}", report.load.weight_n);
    let _ = writeln!(out, "  Lift at Load (N):     {:.2}", report.load.limit_load_n);
    let _ = writeln!(out, "  Root Moment (N·m):    {:.2}", report.load.root_moment_nm);
    let _ = writeln!(
        out,
        "  Material:             {:.0} MPa, target SF {:.2}",
        report.material.allowable_strength_mpa, report.material.target_safety_factor
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Results:");
    let _ = writeln!(
        out,
        "  {:>10} {:>10} {:>13} {:>8}  {}",
        "Outer (mm)", "Inner (mm)", "Stress (MPa)", "SF", "Pass"
    );
    for e in &report.evaluations {
        let _ = writeln!(
            out,
            "  {:>10} {:>10} {:>13.1} {:>8.2}  {}",
            e.geometry.outer_diameter_mm,
            e.geometry.inner_diameter_mm,
            e.stress_mpa,
            e.safety_factor,
            status_icon(e.passes)
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "═══════════════════════════════════════");
    match &report.recommendation {
        Some(best) => {
            let _ = writeln!(
                out,
                "  Recommended: {} x {} mm  (SF={:.2})",
                best.geometry.outer_diameter_mm, best.geometry.inner_diameter_mm, best.safety_factor
            );
        }
        None => {
            let _ = writeln!(out, "  No tube meets the target safety factor!");
        }
    }
    let _ = writeln!(out, "═══════════════════════════════════════");

    if !parsed.skipped.is_empty() || !report.rejected.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Ignored input:");
        let mut ignored: Vec<(usize, String)> = parsed
            .skipped
            .iter()
            .map(|s| (s.line_number, format!("'{}' ({})", s.content, s.reason)))
            .collect();
        for r in &report.rejected {
            match parsed.source_line(r.index) {
                Some(line) => ignored.push((line, r.error.to_string())),
                None => {
                    let _ = writeln!(out, "  tube {}: {}", r.index + 1, r.error);
                }
            }
        }
        ignored.sort_by_key(|(line, _)| *line);
        for (line, detail) in ignored {
            let _ = writeln!(out, "  line {}: {}", line, detail);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use spar_core::api;
    use spar_core::calculations::{compute_load, rank, LoadInputs, MaterialSpec};
    use spar_core::candidates::parse_candidates;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_renders_reference_run() {
        let report = api::rank(
            5.0,
            2.0,
            3.0,
            &[(8.0, 6.0), (10.0, 8.0), (12.0, 8.0), (14.0, 10.0)],
            600.0,
            2.0,
        )
        .unwrap();
        let text = render_report(&report, &ParsedCandidates::default(), fixed_time());

        assert!(text.contains("Generated: 2026-03-14 09:30 UTC"));
        assert!(text.contains("Weight (N):           49.05"));
        assert!(text.contains("Lift at Load (N):     147.15"));
        assert!(text.contains("Root Moment (N·m):    36.79"));
        assert!(text.contains("270.2"));
        assert!(text.contains("2.22  [OK]"));
        assert!(text.contains("Recommended: 12 x 8 mm  (SF=2.22)"));
        assert!(!text.contains("Ignored input"));
    }

    #[test]
    fn test_renders_no_recommendation() {
        let report = api::rank(5.0, 2.0, 3.0, &[(8.0, 6.0)], 600.0, 2.0).unwrap();
        let text = render_report(&report, &ParsedCandidates::default(), fixed_time());
        assert!(text.contains("No tube meets the target safety factor!"));
        assert!(text.contains("[FAIL]"));
    }

    fn rank_parsed(parsed: &ParsedCandidates) -> RankedReport {
        let load = compute_load(&LoadInputs::new(5.0, 2.0, 3.0)).unwrap();
        rank(&load, &parsed.geometries, &MaterialSpec::new(600.0, 2.0)).unwrap()
    }

    #[test]
    fn test_lists_ignored_input_by_line() {
        let parsed = parse_candidates("x\n12,8\ninf,8");
        let report = rank_parsed(&parsed);
        let text = render_report(&report, &parsed, fixed_time());

        let ignored = text.split("Ignored input:").nth(1).unwrap();
        let lines: Vec<&str> = ignored.lines().filter(|l| !l.is_empty()).collect();
        assert!(lines[0].starts_with("  line 1: 'x'"));
        assert!(lines[1].starts_with("  line 3: Invalid geometry inf x 8 mm"));
        assert!(!text.contains("tube 2"));
    }

    #[test]
    fn test_rejected_without_source_line_uses_index() {
        let report = api::rank(5.0, 2.0, 3.0, &[(12.0, 8.0), (f64::INFINITY, 8.0)], 600.0, 2.0).unwrap();
        let text = render_report(&report, &ParsedCandidates::default(), fixed_time());
        assert!(text.contains("tube 2: Invalid geometry"));
    }
}
