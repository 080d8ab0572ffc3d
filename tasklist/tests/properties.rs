//! Property tests for the task list reducer.

use proptest::prelude::*;
use tasklist::{TaskId, TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
use tasklist_core::reducer::Reducer;
use tasklist_testing::replay;

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[ ]{0,2}[a-z][a-z ]{0,10}",
    ]
}

fn non_blank_text() -> impl Strategy<Value = String> {
    "[ ]{0,2}[a-z][a-z ]{0,10}"
}

fn id() -> impl Strategy<Value = TaskId> {
    (0_u64..8).prop_map(TaskId::new)
}

fn action() -> impl Strategy<Value = TaskListAction> {
    prop_oneof![
        text().prop_map(|text| TaskListAction::Add { text }),
        text().prop_map(|text| TaskListAction::InputChanged { text }),
        Just(TaskListAction::Submit),
        id().prop_map(|id| TaskListAction::Toggle { id }),
        id().prop_map(|id| TaskListAction::Remove { id }),
    ]
}

fn run(actions: Vec<TaskListAction>) -> TaskListState {
    replay(
        &TaskListReducer::new(),
        &TaskListEnvironment::new(),
        TaskListState::new(),
        actions,
    )
}

fn apply(state: &mut TaskListState, action: TaskListAction) {
    let effects = TaskListReducer::new().reduce(state, action, &TaskListEnvironment::new());
    assert!(effects.iter().all(|e| e.is_none()));
}

proptest! {
    #[test]
    fn adds_get_distinct_increasing_ids(texts in prop::collection::vec(non_blank_text(), 0..20)) {
        let state = run(texts.iter().map(|text| TaskListAction::Add { text: text.clone() }).collect());

        prop_assert_eq!(state.tasks().len(), texts.len());
        let ids: Vec<u64> = state.tasks().iter().map(|t| t.id.get()).collect();
        let expected: Vec<u64> = (1..=texts.len() as u64).collect();
        prop_assert_eq!(ids, expected);
        for (task, text) in state.tasks().iter().zip(&texts) {
            prop_assert_eq!(task.text.as_str(), text.trim());
        }
    }

    #[test]
    fn blank_add_changes_nothing(
        setup in prop::collection::vec(action(), 0..20),
        blank in "[ \t\n]{0,5}",
    ) {
        let mut state = run(setup);
        let before = state.clone();

        apply(&mut state, TaskListAction::Add { text: blank });

        prop_assert_eq!(state, before);
    }

    #[test]
    fn toggle_twice_restores_state(setup in prop::collection::vec(action(), 0..20), id in id()) {
        let mut state = run(setup);
        let before = state.clone();

        apply(&mut state, TaskListAction::Toggle { id });
        if before.get(id).is_some() {
            prop_assert_ne!(
                state.get(id).map(|t| t.completed),
                before.get(id).map(|t| t.completed)
            );
        } else {
            prop_assert_eq!(&state, &before);
        }
        apply(&mut state, TaskListAction::Toggle { id });

        prop_assert_eq!(state, before);
    }

    #[test]
    fn remove_drops_at_most_one_and_keeps_order(
        setup in prop::collection::vec(action(), 0..20),
        id in id(),
    ) {
        let mut state = run(setup);
        let before = state.clone();

        apply(&mut state, TaskListAction::Remove { id });

        let expected: Vec<_> = before.tasks().iter().filter(|t| t.id != id).cloned().collect();
        let removed = usize::from(before.get(id).is_some());
        prop_assert_eq!(state.tasks().len(), before.tasks().len() - removed);
        prop_assert_eq!(state.tasks(), expected.as_slice());
        prop_assert_eq!(state.next_id(), before.next_id());
    }

    #[test]
    fn invariants_hold_for_any_sequence(actions in prop::collection::vec(action(), 0..40)) {
        let state = run(actions);

        let summary = state.summary();
        prop_assert!(summary.completed <= summary.total);
        prop_assert_eq!(summary.total, state.tasks().len());

        let ids: Vec<TaskId> = state.tasks().iter().map(|t| t.id).collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(ids.iter().all(|id| *id < state.next_id()));
        prop_assert!(state.tasks().iter().all(|t| !t.text.trim().is_empty()));
    }
}

#[test]
fn buy_milk_scenario() {
    let mut state = TaskListState::new();

    apply(&mut state, TaskListAction::Add { text: "Buy milk".to_string() });
    assert_eq!(state.tasks().len(), 1);
    assert_eq!(state.tasks()[0].id, TaskId::new(1));
    assert_eq!(state.tasks()[0].text, "Buy milk");
    assert!(!state.tasks()[0].completed);
    assert_eq!(state.next_id(), TaskId::new(2));

    let before = state.clone();
    apply(&mut state, TaskListAction::Add { text: "  ".to_string() });
    assert_eq!(state, before);

    apply(&mut state, TaskListAction::Toggle { id: TaskId::new(1) });
    assert!(state.tasks()[0].completed);
    assert_eq!((state.summary().completed, state.summary().total), (1, 1));

    apply(&mut state, TaskListAction::Remove { id: TaskId::new(1) });
    assert!(state.is_empty());
    assert_eq!((state.summary().completed, state.summary().total), (0, 0));
}
