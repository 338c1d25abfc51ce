// tests/walker_tests.rs

use stepwalker::{Advance, Guide, Step, StepWalker, View, WalkState};

fn builtin_walker() -> StepWalker {
    Guide::builtin().walker()
}

// ============================================================================
// Initial State
// ============================================================================

#[test]
fn test_new_walker_not_started() {
    let walker = builtin_walker();
    assert_eq!(walker.cursor(), -1);
    assert_eq!(walker.state(), WalkState::NotStarted);
    assert_eq!(walker.current_display(), View::Empty);
    assert!(!walker.is_complete());
}

#[test]
fn test_empty_view_renders_nothing() {
    let walker = builtin_walker();
    assert_eq!(walker.current_display().to_string(), "");
}

// ============================================================================
// Five-step Walkthrough
// ============================================================================

#[test]
fn test_builtin_walkthrough() {
    let mut walker = builtin_walker();
    let steps: Vec<String> = walker.steps().iter().map(|s| s.text.clone()).collect();
    assert_eq!(steps.len(), 5);

    for i in 0..5 {
        assert_eq!(walker.advance(), Advance::Shown(i));
        assert_eq!(walker.cursor(), i as isize);
        assert_eq!(walker.state(), WalkState::InProgress(i));
        assert_eq!(walker.current_display().to_string(), steps[i]);
    }

    assert_eq!(walker.advance(), Advance::Completed);
    assert_eq!(walker.cursor(), 5);
    assert_eq!(walker.state(), WalkState::Terminal);
    assert_eq!(
        walker.current_display(),
        View::Complete("🎉 Félicitations ! Tu es prêt à coder sur Pi Network.")
    );
}

#[test]
fn test_first_step_text() {
    let mut walker = builtin_walker();
    walker.advance();
    assert_eq!(
        walker.current_display().to_string(),
        "Étape 1 : Ouvre PowerShell."
    );
}

#[test]
fn test_view_carries_step_and_index() {
    let mut walker = StepWalker::new(
        vec![Step::new("Install").with_id("install").with_command("apt install git")],
        "done",
    );
    walker.advance();

    match walker.current_display() {
        View::Step { index, step } => {
            assert_eq!(index, 0);
            assert_eq!(step.id.as_deref(), Some("install"));
            assert_eq!(step.command.as_deref(), Some("apt install git"));
        }
        other => panic!("expected a step view, got {:?}", other),
    }
}

// ============================================================================
// Terminal State
// ============================================================================

#[test]
fn test_advance_after_terminal_is_noop() {
    let mut walker = StepWalker::new(["a", "b"], "fin");
    walker.advance();
    walker.advance();
    assert_eq!(walker.advance(), Advance::Completed);

    for _ in 0..10 {
        assert_eq!(walker.advance(), Advance::Inert);
        assert_eq!(walker.cursor(), 2);
        assert_eq!(walker.current_display(), View::Complete("fin"));
    }
}

#[test]
fn test_empty_sequence_completes_on_first_advance() {
    let mut walker = StepWalker::new(Vec::<Step>::new(), "nothing to do");
    assert_eq!(walker.state(), WalkState::NotStarted);
    assert_eq!(walker.advance(), Advance::Completed);
    assert_eq!(walker.cursor(), 0);
    assert_eq!(walker.current_display(), View::Complete("nothing to do"));
    assert_eq!(walker.advance(), Advance::Inert);
}

#[test]
fn test_cursor_never_decreases() {
    let mut walker = StepWalker::new(["a", "b", "c"], "ok");
    let mut last = walker.cursor();

    for _ in 0..8 {
        walker.advance();
        assert!(walker.cursor() >= last);
        last = walker.cursor();
    }
    assert_eq!(last, 3);
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn test_progress_counts() {
    let mut walker = StepWalker::new(["a", "b", "c"], "ok");
    assert_eq!(walker.progress().to_string(), "0/3");

    walker.advance();
    walker.advance();
    let progress = walker.progress();
    assert_eq!(progress.shown, 2);
    assert_eq!(progress.total, 3);
    assert!(!progress.is_complete);

    walker.advance();
    walker.advance();
    let progress = walker.progress();
    assert_eq!(progress.shown, 3);
    assert!(progress.is_complete);
    assert_eq!(progress.to_string(), "3/3");
}
