//! Candidate filtering and ranking.

use ghost_core::entities::Task;

/// Tasks in a workable column, in board order.
#[must_use]
pub fn candidates(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.column.is_workable()).collect()
}

/// Highest priority wins; ties go to the shorter text, then to board order.
#[must_use]
pub fn select_from<'a>(candidates: &[&'a Task]) -> Option<&'a Task> {
    let mut ranked = candidates.to_vec();
    // sort_by is stable, so equal keys keep their board order
    ranked.sort_by(|a, b| {
        b.priority
            .score()
            .cmp(&a.priority.score())
            .then_with(|| a.text_len().cmp(&b.text_len()))
    });
    ranked.first().copied()
}

/// Pick the best workable task from a whole board, if any.
#[must_use]
pub fn select_best(tasks: &[Task]) -> Option<&Task> {
    select_from(&candidates(tasks))
}
