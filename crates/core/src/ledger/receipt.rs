//! Receipt export
//!
//! Pure read-side formatting: builds a fixed-order receipt document from an
//! invoice and renders it to text. No state is touched.

use chrono::{DateTime, Utc};
use cobrix_domain::{Invoice, Receipt, TransactionStatus};

/// Build a receipt document for an invoice.
///
/// Section order: title, status line, client info, payment details, the
/// conditional rejection/success block, footer timestamp.
pub fn build_receipt(invoice: &Invoice, generated_at: DateTime<Utc>) -> Receipt {
    let outcome_line = match invoice.status {
        TransactionStatus::Rejected => Some(
            invoice
                .rejection_reason
                .clone()
                .unwrap_or_else(|| "Payment rejected".to_string()),
        ),
        TransactionStatus::Successful => {
            Some("Payment received and confirmed. Thank you!".to_string())
        }
        _ => None,
    };

    Receipt {
        title: format!("Payment Receipt {}", invoice.reference),
        status_line: status_label(invoice.status).to_string(),
        client_name: invoice.client_name.clone(),
        concept: invoice.concept.clone(),
        amount_formatted: format_usd(invoice.amount),
        payment_method: invoice.payment_method.label().to_string(),
        reference: invoice.reference.clone(),
        outcome_line,
        generated_at,
    }
}

/// Render a receipt to plain text, one section per line in fixed order.
pub fn render_text(receipt: &Receipt) -> String {
    let mut lines = vec![
        receipt.title.clone(),
        format!("Status: {}", receipt.status_line),
        format!("Client: {}", receipt.client_name),
        format!("Concept: {}", receipt.concept),
        format!("Amount: {}", receipt.amount_formatted),
        format!("Payment method: {}", receipt.payment_method),
        format!("Reference: {}", receipt.reference),
    ];
    if let Some(outcome) = &receipt.outcome_line {
        lines.push(outcome.clone());
    }
    lines.push(format!(
        "Generated at {}",
        receipt.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.join("\n")
}

/// Format an amount as USD currency with thousands separators.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

fn status_label(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "Pending",
        TransactionStatus::Successful => "Successful",
        TransactionStatus::Rejected => "Rejected",
        TransactionStatus::ManualReconciliation => "Manual Reconciliation",
    }
}
