//! HTML page builders.
//!
//! Small string builders over a shared layout: the listing page, the error
//! page rendered when the backend is unreachable, and the moderation page.
//! Image URLs are built from the configured public bucket; only names the
//! scrub in `kernel::approval` let through ever reach these pages.

use events_api::Event;

use crate::kernel::PendingApproval;

/// Escape text for interpolation into HTML body or attribute positions.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Public URL for an object in the display bucket.
fn image_url(bucket: &str, name: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", escape(bucket), escape(name))
}

/// The outer page shared by every view.
fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Events</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        body
    )
}

/// The public listing page.
pub fn home(events: &[Event], bucket: &str) -> String {
    let mut body = String::from("<h1>Welcome to the events application</h1>\n<ul>\n");
    for event in events {
        body.push_str("<li>\n");
        body.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n<p>{}</p>\n<p>{}</p>\n<p>{} likes</p>\n",
            escape(&event.title),
            escape(&event.description),
            escape(&event.location),
            escape(&event.datetime_added),
            event.likes,
        ));
        if !event.image.is_empty() {
            body.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">\n",
                image_url(bucket, &event.image),
                escape(&event.title),
            ));
        }
        body.push_str(&format!(
            "<form method=\"post\" action=\"/event/like\">\
             <input type=\"hidden\" name=\"id\" value=\"{id}\">\
             <button type=\"submit\">Like</button></form>\n\
             <form method=\"post\" action=\"/event/unlike\">\
             <input type=\"hidden\" name=\"id\" value=\"{id}\">\
             <button type=\"submit\">Unlike</button></form>\n",
            id = escape(&event.id),
        ));
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<h2>Add an event</h2>\n\
         <form method=\"post\" action=\"/event\" enctype=\"multipart/form-data\">\n\
         <input type=\"text\" name=\"title\" placeholder=\"Title\">\n\
         <input type=\"text\" name=\"description\" placeholder=\"Description\">\n\
         <input type=\"text\" name=\"location\" placeholder=\"Location\">\n\
         <input type=\"file\" name=\"file\">\n\
         <button type=\"submit\">Create</button>\n</form>\n",
    );
    layout(&body)
}

/// Rendered when the backend call fails; the page itself still returns 200.
pub fn error_message(error: &str) -> String {
    layout(&format!(
        "<h1>Error</h1>\n<p>The events service is not available right now.</p>\n<p>{}</p>",
        escape(error),
    ))
}

/// The moderation page: up to one pending image with its approval form.
pub fn images(messages: &[PendingApproval], bucket: &str) -> String {
    let mut body = String::from("<h1>Images awaiting approval</h1>\n");
    if messages.is_empty() {
        body.push_str("<p>Nothing is waiting for approval.</p>\n");
    }
    for message in messages {
        body.push_str(&format!(
            "<div>\n<img src=\"{}\" alt=\"pending image\">\n\
             <form method=\"post\" action=\"/event/approve\">\
             <input type=\"hidden\" name=\"id\" value=\"{}\">\
             <input type=\"hidden\" name=\"image\" value=\"{}\">\
             <button type=\"submit\">Approve</button></form>\n</div>\n",
            image_url(bucket, &message.image),
            escape(&message.ack_id),
            escape(&message.image),
        ));
    }
    layout(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>\"&'"),
            "&lt;script&gt;&quot;&amp;&#39;"
        );
    }

    #[test]
    fn home_omits_img_tags_for_empty_images() {
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            { "id": 1, "title": "a mock event", "image": "" },
            { "id": 2, "title": "another mock event", "image": "" },
        ]))
        .unwrap();
        let page = home(&events, "live-bucket");
        assert!(page.contains("Welcome"));
        assert!(!page.contains("<img"));
    }

    #[test]
    fn home_links_approved_images_through_the_live_bucket() {
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            { "id": 1, "title": "a mock event", "image": "thumb-party.jpg" },
        ]))
        .unwrap();
        let page = home(&events, "live-bucket");
        assert!(page.contains("https://live-bucket.s3.amazonaws.com/thumb-party.jpg"));
    }
}
