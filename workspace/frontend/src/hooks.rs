use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

/// API fetch state enum
///
/// Exactly one of the three is ever rendered; the loaded and error states
/// are terminal for a given mount.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

/// Run `fetch_fn` once on mount and track its outcome.
///
/// The effect's cleanup flips a cancellation flag, so a response that lands
/// after the component unmounted is dropped instead of written into
/// discarded state. There is no refetch; remounting restarts the cycle.
#[hook]
pub fn use_fetch_once<T, F, Fut>(fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));
            let flag = cancelled.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_fn().await;
                if flag.get() {
                    log::debug!("Fetch settled after unmount; dropping result");
                    return;
                }
                match result {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(err) => state.set(FetchState::Error(err)),
                }
            });

            move || cancelled.set(true)
        });
    }

    state
}
