use crate::config::EnvConfig;
use crate::errors::NavError;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::warn;

/// Which change is being saved; only used in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum ChangeKind {
    #[strum(to_string = "add")]
    Add,
    #[strum(to_string = "edit")]
    Edit,
    #[strum(to_string = "delete")]
    Delete,
}

/// Save a change before it is applied to the tree.
///
/// There is no backend: the save waits `save_delay_ms` and is rejected with
/// probability `save_failure_rate`. With the defaults it resolves immediately.
pub(crate) async fn commit_change(cfg: &EnvConfig, kind: ChangeKind) -> Result<(), NavError> {
    if cfg.save_delay_ms > 0 {
        TimeoutFuture::new(cfg.save_delay_ms).await;
    }

    // Math.random is only reachable when failures are enabled.
    let roll = if cfg.save_failure_rate > 0.0 {
        js_sys::Math::random()
    } else {
        1.0
    };

    if should_fail(cfg.save_failure_rate, roll) {
        warn!("save step rejected {kind}");
        return Err(NavError::OperationFailed("serwer odrzucił zmianę".to_string()));
    }
    Ok(())
}

/// `roll` is uniform in `[0, 1)`.
pub(crate) fn should_fail(failure_rate: f64, roll: f64) -> bool {
    roll < failure_rate
}
