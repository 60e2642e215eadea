//! Fixed-template LaTeX insights document: the five summary facts and the
//! top-influencers-by-revenue table, ready for typesetting.

use std::fmt::Write;

use influencer_pipeline::summary::{CampaignInsights, TopInfluencer};

const NO_DATA: &str = "No data for the selected filters";

/// `1234567.5` → `1,234,567.50`.
fn money(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let cents = (amount.fract().abs() * 100.0).round() as u64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}{grouped}.{cents:02}")
}

fn likes(count: u64) -> String {
    money(count as f64).trim_end_matches(".00").to_string()
}

/// Render the insights document. Facts without backing data render the
/// explicit no-data marker instead of being omitted.
pub fn insights_latex(insights: &CampaignInsights, top: &[TopInfluencer]) -> String {
    let mut doc = String::new();

    doc.push_str(
        "\\documentclass{article}\n\
         \\usepackage{geometry}\n\
         \\geometry{a4paper, margin=1in}\n\
         \\usepackage{booktabs}\n\
         \\usepackage[utf8]{inputenc}\n\
         \\begin{document}\n\
         \\section*{Influencer Campaign Insights}\n\
         \\begin{itemize}\n",
    );

    let top_brand = match &insights.top_brand {
        Some(b) => format!("{} with \\${}", b.brand, money(b.revenue)),
        None => NO_DATA.to_string(),
    };
    let best_roas = match &insights.best_roas {
        Some(s) => format!("{} with ROAS of {:.2}x", s.name, s.value),
        None => NO_DATA.to_string(),
    };
    let best_incremental = match &insights.best_incremental_roas {
        Some(s) => format!("{} with Incremental ROAS of {:.2}x", s.name, s.value),
        None => NO_DATA.to_string(),
    };
    let most_engaged = match &insights.most_engaged_platform {
        Some(p) => format!("{} with {} likes", p.platform, likes(p.likes)),
        None => NO_DATA.to_string(),
    };
    let top_persona = match &insights.top_persona {
        Some(p) => format!("{} influencers drive the highest revenue", p.category),
        None => NO_DATA.to_string(),
    };

    let _ = writeln!(doc, "    \\item \\textbf{{Top Performing Brand}}: {top_brand}");
    let _ = writeln!(doc, "    \\item \\textbf{{Best ROAS}}: {best_roas}");
    let _ = writeln!(doc, "    \\item \\textbf{{Best Incremental ROAS}}: {best_incremental}");
    let _ = writeln!(doc, "    \\item \\textbf{{Most Engaged Platform}}: {most_engaged}");
    let _ = writeln!(doc, "    \\item \\textbf{{Top Persona}}: {top_persona}");
    doc.push_str("\\end{itemize}\n");

    doc.push_str(
        "\\section*{Top Influencers by Revenue}\n\
         \\begin{table}[h]\n\
         \\centering\n\
         \\begin{tabular}{|l|c|c|}\n\
         \\hline\n\
         \\textbf{Name} & \\textbf{Category} & \\textbf{Revenue} \\\\\n\
         \\hline\n",
    );
    for row in top {
        let category = row.category.as_deref().unwrap_or("--");
        let _ = writeln!(
            doc,
            "{} & {} & \\${} \\\\ \\hline",
            row.name,
            category,
            money(row.revenue)
        );
    }
    doc.push_str(
        "\\end{tabular}\n\
         \\caption{Top Influencers by Revenue}\n\
         \\end{table}\n\
         \\end{document}\n",
    );

    doc
}
