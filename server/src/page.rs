//! HTML rendering for the conversion page.
//!
//! Thin display plumbing: one text field per codec, a submit button per
//! field (named `w`, valued with the codec identifier), an `hrp` field for
//! Bech32, and a `<pre>` block for the wire disassembly. Side parameters
//! the page does not recognize are re-embedded as hidden inputs so they
//! survive the next submission.

use bytescope_codec::Params;
use bytescope_convert::Conversion;
use std::fmt::Write;

/// Display label for a codec identifier.
fn label(id: &str) -> &str {
    match id {
        "ascii" => "ASCII",
        "binary" => "Binary",
        "decimal" => "Decimal",
        "hex" => "Hexadecimal",
        "base64" => "Base64",
        "bech32" => "Bech32",
        "protobuf" => "Protobuf",
        other => other,
    }
}

/// Escapes text for embedding in HTML content or attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Keys the form already round-trips through named fields.
fn recognized(key: &str) -> bool {
    key == "w" || key == "codec" || key == "input" || key == "hrp" || key.starts_with("input-")
}

/// Renders the full page for a finished conversion cycle.
pub fn render(conversion: &Conversion, params: &Params) -> String {
    let mut out = String::new();
    out.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>bytescope</title>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <style>\n\
         body { font-family: monospace; max-width: 40rem; margin: 2rem auto; }\n\
         label { display: block; color: #666; margin-top: 1rem; }\n\
         input[type=text] { width: 80%; }\n\
         pre { background: #eee; padding: 0.5rem; overflow-x: auto; }\n\
         </style>\n</head>\n<body>\n<h1>bytescope</h1>\n\
         <p>Convert bytes between formats</p>\n<form method=\"get\" action=\"/\">\n",
    );

    for field in &conversion.fields {
        if field.id == "protobuf" {
            let _ = write!(
                out,
                "<label>{}</label>\n<pre>{}</pre>\n",
                label(field.id),
                escape(&field.text)
            );
            continue;
        }
        if field.id == "bech32" {
            let hrp = params.get("hrp").unwrap_or("");
            let _ = write!(
                out,
                "<label>hrp</label>\n\
                 <input type=\"text\" name=\"hrp\" value=\"{}\" placeholder=\"cosmos\" />\n",
                escape(hrp)
            );
        }
        let _ = write!(
            out,
            "<label for=\"input-{id}\">{}</label>\n\
             <input type=\"text\" id=\"input-{id}\" name=\"input-{id}\" value=\"{}\" />\n\
             <button type=\"submit\" name=\"w\" value=\"{id}\">Submit</button>\n",
            label(field.id),
            escape(&field.text),
            id = field.id,
        );
    }

    // Reflect unrecognized side parameters into the next submission.
    for (key, value) in params.iter() {
        if !recognized(key) {
            let _ = write!(
                out,
                "<input type=\"hidden\" name=\"{}\" value=\"{}\" />\n",
                escape(key),
                escape(value)
            );
        }
    }

    out.push_str("</form>\n</body>\n</html>\n");
    out
}
