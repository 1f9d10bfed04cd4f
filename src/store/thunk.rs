//! Runner for three-phase asynchronous actions.

use std::future::Future;

use crate::api::RequestError;
use crate::store::app::AppAction;
use crate::store::async_phase::{AsyncAction, Phase, RequestId};
use crate::store::container::Store;

/// Dispatch `Pending`, await `call`, then dispatch `Fulfilled` or `Rejected`.
///
/// `call` is not polled until after the pending action has been applied.
/// Failures never escape: they become the `Rejected` action and the
/// returned phase.
pub async fn dispatch_async<A, P, F, Fut>(store: &Store, arg: A, wrap: F, call: Fut) -> Phase<P>
where
    A: Clone,
    P: Clone,
    F: Fn(AsyncAction<A, P>) -> AppAction,
    Fut: Future<Output = Result<P, RequestError>>,
{
    let request_id = RequestId::new();
    let pending = wrap(AsyncAction::pending(request_id, arg.clone()));
    let type_name = pending.type_name();
    store.dispatch(pending);

    match call.await {
        Ok(payload) => {
            tracing::info!(%request_id, action = %type_name, "fulfilled");
            store.dispatch(wrap(AsyncAction::fulfilled(request_id, arg, payload.clone())));
            Phase::Fulfilled(payload)
        }
        Err(err) => {
            let message = err.to_string();
            tracing::info!(
                %request_id,
                action = %type_name,
                error_type = err.error_type(),
                error = %message,
                "rejected"
            );
            store.dispatch(wrap(AsyncAction::rejected(request_id, arg, message.clone())));
            Phase::Rejected(message)
        }
    }
}
