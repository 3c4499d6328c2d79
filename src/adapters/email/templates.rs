//! HTML mail templates for the request lifecycle.

use crate::domain::request::CreditRequest;
use crate::domain::risk::RiskCalculator;
use crate::ports::{RenderedMail, RequestMailRenderer};

/// Reason shown when a rejection carries none.
pub const DEFAULT_REJECTION_REASON: &str = "Does not meet current evaluation criteria";

const BRAND_COLOR: &str = "#16a34a";
const BRAND_COLOR_DARK: &str = "#15803d";
const ERROR_COLOR: &str = "#dc2626";

/// Renders lifecycle mails as self-contained HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlMailRenderer {
    brand_name: String,
    app_url: String,
}

impl HtmlMailRenderer {
    pub fn new(brand_name: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            app_url: app_url.into(),
        }
    }

    fn layout(&self, title: &str, accent: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body style="font-family: Arial, sans-serif; background-color: #f9fafb; color: #374151;">
<div style="max-width: 600px; margin: 0 auto; background-color: #ffffff;">
<div style="background: {accent}; padding: 32px 24px; text-align: center; color: #ffffff;">
<h1>{brand}</h1>
<p>{title}</p>
</div>
<div style="padding: 32px 24px;">
{body}
<p><a href="{url}" style="color: {dark};">Open your dashboard</a></p>
</div>
<div style="background-color: #f3f4f6; padding: 24px; text-align: center; font-size: 12px;">
<p>This is an automated message from {brand}. Please do not reply.</p>
</div>
</div>
</body>
</html>"#,
            title = escape_html(title),
            accent = accent,
            brand = escape_html(&self.brand_name),
            body = body,
            url = escape_html(&self.app_url),
            dark = BRAND_COLOR_DARK,
        )
    }

    fn details(request: &CreditRequest, extra: &[(&str, String)]) -> String {
        let terms = request.terms();
        let mut rows = vec![
            ("Request", format!("#{}", request.id())),
            ("Requested amount", format_currency(terms.requested_amount)),
            ("Term", format!("{} months", terms.term_months)),
            ("Annual interest rate", format_rate(terms.annual_interest_rate)),
        ];
        rows.extend(extra.iter().map(|(label, value)| (*label, value.clone())));

        let cells: String = rows
            .iter()
            .map(|(label, value)| {
                format!(
                    "<tr><td style=\"color: #6b7280;\">{}</td><td><strong>{}</strong></td></tr>\n",
                    escape_html(label),
                    escape_html(value)
                )
            })
            .collect();
        format!("<table style=\"width: 100%;\">\n{}</table>", cells)
    }
}

impl Default for HtmlMailRenderer {
    fn default() -> Self {
        Self::new("Agri Credit", "https://app.agricredit.example")
    }
}

impl RequestMailRenderer for HtmlMailRenderer {
    fn request_submitted(&self, request: &CreditRequest) -> RenderedMail {
        let body = format!(
            "<p>We received your credit request and our analysts will review it shortly.</p>\n{}",
            Self::details(
                request,
                &[("Submitted on", request.created_at().date().format("%Y-%m-%d").to_string())]
            )
        );
        RenderedMail {
            subject: "Credit request submitted".to_string(),
            html_body: self.layout("Request received", BRAND_COLOR, &body),
        }
    }

    fn request_approved(&self, request: &CreditRequest) -> RenderedMail {
        let terms = request.terms();
        let amount = request.effective_amount();
        let payment = RiskCalculator::monthly_payment(amount, terms.annual_interest_rate, terms.term_months);
        let payment_text = if payment > 0.0 {
            format_currency(payment)
        } else {
            "To be determined".to_string()
        };

        let body = format!(
            "<p>Good news: your credit request has been approved.</p>\n{}",
            Self::details(
                request,
                &[
                    ("Approved amount", format_currency(amount)),
                    ("Monthly payment", payment_text),
                ]
            )
        );
        RenderedMail {
            subject: "Credit request approved".to_string(),
            html_body: self.layout("Request approved", BRAND_COLOR, &body),
        }
    }

    fn request_rejected(&self, request: &CreditRequest, reason: Option<&str>) -> RenderedMail {
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_REJECTION_REASON);

        let mut body = format!(
            "<p>After reviewing your credit request we are unable to approve it at this time.</p>\n\
             <p><strong>Reason:</strong> {}</p>\n{}",
            escape_html(reason),
            Self::details(request, &[])
        );
        if !request.warning_flags().is_empty() {
            let items: String = request
                .warning_flags()
                .iter()
                .map(|flag| format!("<li>{}</li>", escape_html(flag)))
                .collect();
            body.push_str(&format!(
                "\n<h4>Factors considered</h4>\n<ul>{}</ul>",
                items
            ));
        }

        RenderedMail {
            subject: "Credit request rejected".to_string(),
            html_body: self.layout("Request not approved", ERROR_COLOR, &body),
        }
    }
}

/// `$1,234,567 COP`, rounded to whole pesos.
fn format_currency(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${} COP", grouped)
}

fn format_rate(rate: f64) -> String {
    if rate > 0.0 {
        format!("{:.1}%", rate)
    } else {
        "To be determined".to_string()
    }
}

fn escape_html(text: &str) -> String {
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
