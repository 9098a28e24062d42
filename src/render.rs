//! Chat reply rendering
//!
//! The thin presentation layer: turns a filtered offer list into the HTML
//! fragment embedded in the chat reply. Error presentation lives on
//! [`crate::StayfinderError::user_message`]; this module only renders
//! success.

use crate::models::HotelOffer;
use crate::prompt::capitalize;
use std::fmt::Write;

/// Render the success reply: a headline plus an unordered list of up to
/// `max_shown` offers.
#[must_use]
pub fn render_offers(
    destination: &str,
    date_phrase: &str,
    nightly_budget: u32,
    offers: &[HotelOffer],
    max_shown: usize,
) -> String {
    let mut reply = format!(
        "Here are some hotels in {} for {} under ₹{}/night:<br><ul>",
        capitalize(destination),
        date_phrase,
        nightly_budget
    );

    for offer in offers.iter().take(max_shown) {
        let features = if offer.free_cancellation {
            "Free cancellation"
        } else {
            "N/A"
        };

        let _ = write!(
            reply,
            "<li><strong>{}</strong><br>\
             Stars: {}<br>\
             Price: ₹{}/night (Total: ₹{} + ₹{} taxes)<br>\
             Rating: {} {} ({} reviews)<br>\
             Features: {}<br>\
             <img src='{}' alt='{}' style='max-width: 200px; height: auto;'></li>",
            offer.name,
            star_glyphs(offer.stars),
            offer.price_per_night,
            offer.total_price,
            offer.taxes,
            offer.review_score,
            offer.review_word,
            offer.review_count,
            features,
            offer.photo_url,
            offer.name,
        );
    }

    reply.push_str("</ul>");
    reply
}

/// Five-glyph star representation: filled glyphs for the star class,
/// unfilled for the remainder. Classes above 5 are clamped.
#[must_use]
pub fn star_glyphs(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(name: &str) -> HotelOffer {
        HotelOffer {
            name: name.to_string(),
            stars: 3,
            price_per_night: 3500.0,
            total_price: 7000.0,
            taxes: 420.0,
            review_score: 8.1,
            review_word: "Very Good".to_string(),
            review_count: 980,
            photo_url: "https://example.com/p.jpg".to_string(),
            free_cancellation: true,
        }
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(star_glyphs(0), "☆☆☆☆☆");
        assert_eq!(star_glyphs(3), "★★★☆☆");
        assert_eq!(star_glyphs(5), "★★★★★");
        // Out-of-range classes are clamped rather than panicking
        assert_eq!(star_glyphs(7), "★★★★★");
    }

    #[test]
    fn test_render_headline_and_list() {
        let reply = render_offers("mumbai", "March 28-30", 5000, &[offer("Taj")], 5);
        assert!(reply.starts_with(
            "Here are some hotels in Mumbai for March 28-30 under ₹5000/night:<br><ul>"
        ));
        assert!(reply.ends_with("</ul>"));
        assert!(reply.contains("<li><strong>Taj</strong><br>"));
        assert!(reply.contains("Stars: ★★★☆☆<br>"));
        assert!(reply.contains("Price: ₹3500/night (Total: ₹7000 + ₹420 taxes)<br>"));
        assert!(reply.contains("Rating: 8.1 Very Good (980 reviews)<br>"));
        assert!(reply.contains("Features: Free cancellation<br>"));
        assert!(reply.contains("<img src='https://example.com/p.jpg' alt='Taj'"));
    }

    #[test]
    fn test_render_caps_offer_count() {
        let offers: Vec<HotelOffer> = (0..8).map(|i| offer(&format!("Hotel {i}"))).collect();
        let reply = render_offers("delhi", "April 5-7", 4000, &offers, 5);
        assert_eq!(reply.matches("<li>").count(), 5);
    }

    #[test]
    fn test_render_no_free_cancellation() {
        let mut one = offer("Plain");
        one.free_cancellation = false;
        let reply = render_offers("delhi", "April 5-7", 4000, &[one], 5);
        assert!(reply.contains("Features: N/A<br>"));
    }
}
