use crate::model::{Anchor, AnchorSet};
use crate::moderation::ModeratedCohort;
use crate::report::format_f64_2;

pub fn render_report_text(result: &ModeratedCohort) -> String {
    let mut out = String::new();

    out.push_str("Statistical Moderation Report\n");
    out.push_str("=============================\n\n");

    out.push_str(&format!("Students: {}\n", result.cohort.len()));
    out.push_str(&format!(
        "Rounding: {:?}  Top tie policy: {:?}\n",
        result.config.rounding, result.config.top_tie
    ));
    out.push_str(&format!(
        "Top SAC score {} held by {} student(s); tie mean {}, exam top anchor {}\n\n",
        result.tie.biggest,
        result.tie.occurrence,
        format_f64_2(result.tie.exam_top),
        format_f64_2(result.exam_anchors.top)
    ));

    out.push_str("1. Anchors\n");
    out.push_str(&anchor_table(&result.sac_anchors, &result.exam_anchors));
    out.push('\n');

    out.push_str("2. Students\n");
    out.push_str(&format!(
        "{:>4}  {:<24} {:>5} {:>9} {:>5}\n",
        "No.", "Name", "SAC", "Moderated", "Exam"
    ));
    for (i, student) in result.cohort.students().iter().enumerate() {
        let moderated = student
            .moderated
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>4}  {:<24} {:>5} {:>9} {:>5}\n",
            i + 1,
            result.cohort.display_name(i),
            student.sac,
            moderated,
            student.exam
        ));
    }

    out.push_str(
        "\nNote: scores between anchors are mapped linearly; real moderation smooths the \
         mapping, so these results are an approximation.\n",
    );
    out
}

fn anchor_table(sac: &AnchorSet, exam: &AnchorSet) -> String {
    let mut out = format!("{:<8} {:>8} {:>8}\n", "anchor", "sac", "exam");
    for anchor in Anchor::ALL {
        out.push_str(&format!(
            "{:<8} {:>8} {:>8}\n",
            anchor.name(),
            format_f64_2(sac.get(anchor)),
            format_f64_2(exam.get(anchor))
        ));
    }
    out
}
