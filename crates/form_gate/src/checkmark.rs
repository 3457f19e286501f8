/// Circled tick drawn at the right edge of a valid field.
const CHECKMARK_SVG: &str = r#"<svg width="21" height="20" viewBox="0 0 21 20" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10.3857 19C8.30347 19.0001 6.28566 18.2782 4.67604 16.9574C3.06641 15.6365 1.96458 13.7984 1.55828 11.7562C1.15197 9.71402 1.46634 7.59415 2.4478 5.75777C3.42927 3.92139 5.0171 2.48213 6.94078 1.68523C8.86445 0.888323 11.0049 0.783082 12.9975 1.38744C14.9901 1.99179 16.7114 3.26835 17.8683 4.99959C19.0252 6.73084 19.546 8.80966 19.342 10.8818C19.1379 12.954 18.2217 14.8914 16.7494 16.3638C15.0617 18.0516 12.7726 18.9999 10.3857 19Z" stroke="{color}" stroke-width="1.25" stroke-miterlimit="10"/><path d="M5.89209 10.5209L8.50959 13.1384L14.8846 6.75586" stroke="{color}" stroke-width="1.25" stroke-miterlimit="10"/></svg>"#;

/// CSS `background-image` value with the checkmark stroked in `color`.
pub fn checkmark_background(color: &str) -> String {
    let svg = CHECKMARK_SVG.replace("{color}", color);
    format!(
        "url(\"data:image/svg+xml;utf8,{}\")",
        urlencoding::encode(&svg)
    )
}
