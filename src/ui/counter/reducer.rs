use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::Count;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = Count;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => state.incremented(),
            CounterIntent::Decrement => state.decremented(),
            CounterIntent::Unrecognized(tag) => {
                tracing::debug!(%tag, "ignoring unrecognized counter action");
                state
            }
        }
    }
}
