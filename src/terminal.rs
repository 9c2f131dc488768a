//! A line-oriented rendition of the contact form for the terminal.
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::configuration::ContactDetails;
use crate::contact_form::{ContactForm, Status};

pub const FORM_HEADING: &str = "Questions?";

/// Answer that empties a field instead of keeping its current value.
pub const CLEAR_FIELD: &str = "-";

/// A labelled input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Content];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Email => "Email:",
            Field::Content => "Message:",
        }
    }

    fn current<'a>(&self, form: &'a ContactForm) -> &'a str {
        match self {
            Field::Name => form.draft().name(),
            Field::Email => form.draft().email(),
            Field::Content => form.draft().content(),
        }
    }

    fn update(&self, form: &mut ContactForm, value: String) {
        match self {
            Field::Name => form.set_name(value),
            Field::Email => form.set_email(value),
            Field::Content => form.set_content(value),
        }
    }
}

pub fn render_status(status: &Status) -> Option<String> {
    match status {
        Status::Idle => None,
        Status::Error(e) => Some(format!("[error] {}", e)),
        Status::Success(s) => Some(format!("[ok] {}", s)),
    }
}

pub fn render_contact_card(details: &ContactDetails) -> String {
    format!(
        "{}\n{}\nEmail: {}\nPhone: {}\n",
        details.heading, details.blurb, details.email, details.phone
    )
}

/// Read one line from `reader`, without its line terminator.
///
/// Returns `None` once the input is exhausted.
async fn read_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
}

/// Prompt for every field. An empty answer keeps the current value and
/// [`CLEAR_FIELD`] empties it.
///
/// Returns `false` if the input ran out before all fields were asked.
pub async fn edit_draft<R, W>(
    form: &mut ContactForm,
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    for field in Field::ALL {
        let current = field.current(form);
        let prompt = if current.is_empty() {
            format!("{} ", field.label())
        } else {
            format!("{} [{}] ({} to clear) ", field.label(), current, CLEAR_FIELD)
        };
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;
        match read_line(reader).await? {
            None => return Ok(false),
            Some(answer) if answer.is_empty() => {}
            Some(answer) if answer == CLEAR_FIELD => field.update(form, String::new()),
            Some(answer) => field.update(form, answer),
        }
    }
    Ok(true)
}

/// Submit the current draft a single time and render the outcome.
///
/// Returns `true` if the message was delivered through both channels.
pub async fn submit_once<W>(
    form: &mut ContactForm,
    details: &ContactDetails,
    writer: &mut W,
) -> std::io::Result<bool>
where
    W: AsyncWrite + Unpin,
{
    form.handle_submit().await;
    if let Some(line) = render_status(form.status()) {
        writer.write_all(format!("{}\n", line).as_bytes()).await?;
    }
    writer
        .write_all(format!("\n{}", render_contact_card(details)).as_bytes())
        .await?;
    writer.flush().await?;
    Ok(form.success().is_some())
}

/// Drive the form until a submission succeeds or the visitor gives up.
pub async fn run_session<R, W>(
    form: &mut ContactForm,
    details: &ContactDetails,
    reader: &mut R,
    writer: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(format!("{}\n", FORM_HEADING).as_bytes())
        .await?;
    loop {
        if !edit_draft(form, reader, writer).await? {
            break;
        }
        form.handle_submit().await;
        if let Some(line) = render_status(form.status()) {
            writer.write_all(format!("{}\n", line).as_bytes()).await?;
        }
        if form.success().is_some() {
            break;
        }
        writer.write_all(b"Try again? [Y/n] ").await?;
        writer.flush().await?;
        match read_line(reader).await? {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("n") => continue,
            _ => break,
        }
    }
    writer
        .write_all(format!("\n{}", render_contact_card(details)).as_bytes())
        .await?;
    writer.flush().await
}
