//! Copying a coupon code and the transient "copied" notification.

use std::time::Duration;

use tracing::{debug, error};

use crate::errors::AppError;

pub const COPY_NOTICE_TEXT: &str = "Coupon code copied!";

/// Visible stages of the copy notification. `None` on the surface means the
/// notification is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Attached but not yet faded in.
    Mounted,
    Shown,
    FadingOut,
}

/// Each phase and how long it lasts before the next one.
pub const NOTICE_TIMELINE: [(NoticePhase, Duration); 3] = [
    (NoticePhase::Mounted, Duration::from_millis(10)),
    (NoticePhase::Shown, Duration::from_millis(1500)),
    (NoticePhase::FadingOut, Duration::from_millis(300)),
];

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), AppError>;
}

#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

pub trait NoticeSurface {
    fn set_notice(&self, phase: Option<NoticePhase>);
}

/// Writes `code` to the clipboard and plays the notification. A failed write
/// is logged and returned; no notification is shown for it.
pub async fn copy_coupon_code<C, S, N>(
    clipboard: &C,
    sleeper: &S,
    surface: &N,
    code: &str,
) -> Result<(), AppError>
where
    C: Clipboard + ?Sized,
    S: Sleeper + ?Sized,
    N: NoticeSurface + ?Sized,
{
    if let Err(e) = clipboard.write_text(code).await {
        error!("Failed to copy: {e}");
        return Err(e);
    }
    debug!("Copied coupon code {code}");

    for (phase, hold) in NOTICE_TIMELINE {
        surface.set_notice(Some(phase));
        sleeper.sleep(hold).await;
    }
    surface.set_notice(None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeClipboard {
        fail: bool,
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::clipboard("Document is not focused"));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        slept: RefCell<Vec<Duration>>,
        phases: RefCell<Vec<Option<NoticePhase>>>,
    }

    impl Sleeper for Recorder {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    impl NoticeSurface for Recorder {
        fn set_notice(&self, phase: Option<NoticePhase>) {
            self.phases.borrow_mut().push(phase);
        }
    }

    #[tokio::test]
    async fn successful_copy_plays_the_full_notice() {
        let clipboard = FakeClipboard { fail: false, written: RefCell::default() };
        let recorder = Recorder::default();

        copy_coupon_code(&clipboard, &recorder, &recorder, "SAVE20").await.unwrap();

        assert_eq!(clipboard.written.borrow().as_slice(), ["SAVE20"]);
        assert_eq!(
            recorder.phases.borrow().as_slice(),
            [
                Some(NoticePhase::Mounted),
                Some(NoticePhase::Shown),
                Some(NoticePhase::FadingOut),
                None,
            ]
        );
        let total: Duration = recorder.slept.borrow().iter().sum();
        assert_eq!(total, Duration::from_millis(1810));
    }

    #[tokio::test]
    async fn failed_copy_shows_nothing() {
        let clipboard = FakeClipboard { fail: true, written: RefCell::default() };
        let recorder = Recorder::default();

        let err = copy_coupon_code(&clipboard, &recorder, &recorder, "SAVE20")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Clipboard { .. }));
        assert!(recorder.phases.borrow().is_empty());
        assert!(recorder.slept.borrow().is_empty());
    }
}
