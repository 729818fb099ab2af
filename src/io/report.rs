use crate::analyzer::AnalysisResult;

const RULE_WIDTH: usize = 70;

pub fn generate_report(result: &AnalysisResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push("EYE TRACKING DISEASE DETECTION REPORT".to_string());
    lines.push(heavy.clone());
    lines.push(String::new());

    if let Some(subject) = &result.subject_id {
        lines.push(format!("Subject ID: {}", subject));
    }
    if let Some(session) = &result.session_id {
        lines.push(format!("Session ID: {}", session));
    }
    if let Some(task) = &result.task_type {
        lines.push(format!("Task Type: {}", task));
    }
    lines.push(String::new());

    lines.push("OVERALL ASSESSMENT".to_string());
    lines.push(light.clone());
    lines.push(format!("Risk Level: {}", result.summary.risk_level));
    if let Some(disease) = result.summary.highest_risk_disease {
        lines.push(format!(
            "Highest Risk: {} (Score: {:.2})",
            disease.as_str().to_uppercase(),
            result.summary.highest_risk_score
        ));
    }
    lines.push(String::new());

    lines.push("DISEASE-SPECIFIC ANALYSIS".to_string());
    lines.push(light);
    for (disease, analysis) in &result.disease_analysis {
        lines.push(String::new());
        lines.push(disease.as_str().to_uppercase());
        lines.push(format!("  Risk Score: {:.2}", analysis.risk_score));
        lines.push(format!("  Risk Level: {}", analysis.risk_level));
        if analysis.indicators.is_empty() {
            lines.push("  Indicators: None detected".to_string());
        } else {
            lines.push("  Indicators:".to_string());
            for indicator in &analysis.indicators {
                lines.push(format!("    - {}", indicator));
            }
        }
        if !analysis.recommendations.is_empty() {
            lines.push("  Recommendations:".to_string());
            for rec in &analysis.recommendations {
                lines.push(format!("    - {}", rec));
            }
        }
    }

    if !result.warnings.is_empty() {
        lines.push(String::new());
        lines.push("WARNINGS".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for warning in &result.warnings {
            lines.push(format!("  - {}", warning));
        }
    }

    lines.push(String::new());
    lines.push(heavy.clone());
    lines.push("Note: This analysis is for screening purposes only.".to_string());
    lines.push("Please consult healthcare professionals for diagnosis.".to_string());
    lines.push(heavy);

    lines.join("\n")
}
