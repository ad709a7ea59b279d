//! Estimate summary rendering and export.
//!
//! All money is formatted to two decimal places here and nowhere earlier;
//! the engine keeps full precision between pipeline steps.

use std::path::Path;

use crate::error::ExportError;
use crate::estimate::{EstimateResult, JobEstimate};

/// Render the estimate summary as text.
///
/// Zero-cost material lines are omitted from the breakdown; unpriced lines
/// are always shown so a missing catalog entry never disappears silently.
pub fn render(estimate: &JobEstimate, result: &EstimateResult) -> String {
    let mut out = String::new();

    out.push_str("=== ESTIMATE SUMMARY ===\n");
    out.push_str(&format!("Material costs: ${:.2}\n", result.material_total));

    for line in &result.breakdown {
        match line.cost {
            Some(cost) if !cost.is_zero() => {
                out.push_str(&format!("  - {}: ${:.2}\n", line.name, cost));
            }
            Some(_) => {} // zero quantity: not needed, keep the summary short
            None => {
                out.push_str(&format!(
                    "  - {}: unpriced (qty {})\n",
                    line.name, line.quantity
                ));
            }
        }
    }

    out.push_str(&format!(
        "Labor cost (@ ${:.2}/hr for {:.2} hrs): ${:.2}\n",
        estimate.labor_rate, estimate.labor_hours, result.labor_cost
    ));
    out.push_str(&format!(
        "Overhead ({:.2}%): ${:.2}\n",
        estimate.overhead_pct, result.overhead_amount
    ));
    out.push_str(&format!(
        "Profit ({:.2}%): ${:.2}\n",
        estimate.profit_pct, result.profit_amount
    ));
    out.push_str(&format!("\nTotal Estimate: ${:.2}\n", result.grand_total));

    out
}

/// Write the rendered summary to a file.
///
/// Callers print the summary before attempting export, so the numbers stay
/// visible even when this fails.
pub fn export_to_file(
    path: &Path,
    estimate: &JobEstimate,
    result: &EstimateResult,
) -> Result<(), ExportError> {
    let mut contents = render(estimate, result);
    contents.push_str(&format!(
        "\nGenerated by bidsaw on {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    std::fs::write(path, contents).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "exported estimate");
    Ok(())
}
