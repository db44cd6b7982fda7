//! HTML bodies for the verification and welcome emails.

use hl_core::services::profile::escape_html;

/// A rendered message ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    /// Plain-text alternative
    pub text: String,
}

const DIGIT_BOX_STYLE: &str = "margin: 0 5px; width: 35px; height: 35px; \
    border: 2px solid #e0e0e0; border-radius: 6px; background-color: #f8f9fa; \
    color: #1976D2; font-size: 18px; font-weight: bold; line-height: 31px; \
    text-align: center; display: inline-block;";

fn layout(product: &str, body: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body style="margin:0; padding:0; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #f4f6f8;">
  <table role="presentation" border="0" cellspacing="0" cellpadding="0" width="100%">
    <tr>
      <td align="center" style="padding: 40px 0;">
        <div style="max-width: 600px; background-color: #ffffff; border-radius: 12px; overflow: hidden;">
          <div style="padding: 30px; text-align: center; border-bottom: 2px solid #f0f0f0;">
            <h2 style="margin: 0; color: #1976D2;">{product}</h2>
          </div>
          <div style="padding: 40px 30px; text-align: center;">
{body}
          </div>
          <div style="background-color: #fafafa; padding: 20px; text-align: center; border-top: 1px solid #eeeeee;">
{footer}
          </div>
        </div>
      </td>
    </tr>
  </table>
</body>
</html>"#,
        product = product,
        body = body,
        footer = footer,
    )
}

/// One styled box per code digit
fn digit_boxes(code: &str) -> String {
    code.chars()
        .map(|c| {
            format!(
                r#"<div style="{}">{}</div>"#,
                DIGIT_BOX_STYLE,
                escape_html(&c.to_string())
            )
        })
        .collect()
}

/// Human wording for the validity window, e.g. "2 minutes"
fn expiry_wording(expiry_minutes: i64) -> String {
    if expiry_minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", expiry_minutes)
    }
}

/// Verification email carrying the one-time code
pub fn verification_email(product: &str, code: &str, expiry_minutes: i64) -> RenderedEmail {
    let product = escape_html(product);
    let expiry = expiry_wording(expiry_minutes);

    let body = format!(
        r#"            <h1 style="color: #1a1a1a; margin: 0 0 10px 0; font-size: 24px;">Verify Your Email</h1>
            <p style="color: #666666; margin: 0 0 30px 0; font-size: 16px; line-height: 1.5;">
              Thanks for signing up for {product}!<br/>Please use the code below to verify your account.
            </p>
            <div style="margin: 30px 0; text-align: center;">{boxes}</div>
            <p style="color: #666666; font-size: 14px; margin-top: 30px;">
              This code expires in <b>{expiry}</b>.
            </p>"#,
        product = product,
        boxes = digit_boxes(code),
        expiry = expiry,
    );
    let footer = r#"            <p style="color: #999999; font-size: 12px; margin: 0;">
              If you didn't request this email, you can safely ignore it.
            </p>"#;

    RenderedEmail {
        subject: format!("{} - Verify Your Account", product),
        html: layout(&product, &body, footer),
        text: format!(
            "Your {} verification code is {}. It expires in {}.",
            product, code, expiry
        ),
    }
}

/// Welcome email sent once the account is active
pub fn welcome_email(product: &str, name: &str) -> RenderedEmail {
    let product = escape_html(product);
    let name = escape_html(name);

    let body = format!(
        r#"            <h1 style="color: #1a1a1a; margin: 0 0 10px 0; font-size: 24px;">Welcome, {name}!</h1>
            <p style="color: #666666; margin: 0 0 20px 0; font-size: 16px; line-height: 1.5;">
              Your email has been successfully verified.
            </p>
            <div style="background-color: #e3f2fd; border-left: 4px solid #1976D2; padding: 15px; text-align: left; margin: 30px 0;">
              <h3 style="margin: 0 0 10px 0; color: #1565C0; font-size: 18px;">Next Step: Complete Your Profile</h3>
              <p style="margin: 0; color: #555; font-size: 14px; line-height: 1.5;">
                To use everything {product} offers, please complete your profile in the app.
              </p>
            </div>"#,
        name = name,
        product = product,
    );
    let footer = format!(
        r#"            <p style="color: #999999; font-size: 12px; margin: 0;">{} team</p>"#,
        product
    );

    RenderedEmail {
        subject: format!("Welcome to {}! Next Steps", product),
        html: layout(&product, &body, &footer),
        text: format!(
            "Welcome, {}! Your email is verified. Complete your profile in the app to get started.",
            name
        ),
    }
}
