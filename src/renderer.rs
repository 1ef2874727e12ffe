use crate::coupon::{is_coupon_payload, CouponCard};
use crate::models::Message;
use crate::transcript::TranscriptView;

pub fn render_user<V: TranscriptView + ?Sized>(view: &mut V, text: &str) {
    view.append_user(Message::user(text));
    view.scroll_to_latest();
}

/// Appends a bot reply, as a coupon card when the text carries coupon markers.
pub fn render_bot<V: TranscriptView + ?Sized>(view: &mut V, text: &str) {
    let card = is_coupon_payload(text).then(|| CouponCard::parse(text));
    view.append_bot(Message::bot(text), card);
    view.scroll_to_latest();
}
