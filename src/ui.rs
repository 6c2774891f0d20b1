use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};

const STATUS_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Success,
    Info,
    Warn,
    Error,
}

impl StatusKind {
    fn label(self) -> &'static str {
        match self {
            StatusKind::Success => "SUCCESS",
            StatusKind::Info => "INFO",
            StatusKind::Warn => "WARN",
            StatusKind::Error => "ERROR",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, StatusKind::Warn | StatusKind::Error)
    }
}

fn supports_color(stderr: bool) -> bool {
    let tty = if stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    };
    tty && std::env::var_os("NO_COLOR").is_none()
}

fn style_for(kind: StatusKind) -> Style {
    let style = Style::new().bold();
    match kind {
        StatusKind::Success => style.fg_color(Some(AnsiColor::Green.into())),
        StatusKind::Info => style.fg_color(Some(AnsiColor::Blue.into())),
        StatusKind::Warn => style.fg_color(Some(AnsiColor::Yellow.into())),
        StatusKind::Error => style.fg_color(Some(AnsiColor::Red.into())),
    }
}

fn write_status(kind: StatusKind, message: &str) {
    let stderr = kind.to_stderr();
    let use_color = supports_color(stderr);
    let mut handle: Box<dyn Write> = if stderr {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };

    let padded_label = format!("{:>width$}", kind.label(), width = STATUS_WIDTH);

    let (prefix, suffix) = if use_color {
        let style = style_for(kind);
        (style.render().to_string(), style.render_reset().to_string())
    } else {
        (String::new(), String::new())
    };

    for (idx, line) in message.split('\n').enumerate() {
        if idx == 0 {
            let _ = writeln!(handle, "{prefix}{padded_label}{suffix} {line}");
        } else {
            let _ = writeln!(handle, "{:>width$} {line}", "", width = STATUS_WIDTH);
        }
    }
    let _ = handle.flush();
}

pub fn info(message: impl Display) {
    write_status(StatusKind::Info, &message.to_string());
}

pub fn warn(message: impl Display) {
    write_status(StatusKind::Warn, &message.to_string());
}

pub fn error(message: impl Display) {
    write_status(StatusKind::Error, &message.to_string());
}

pub fn success(message: impl Display) {
    write_status(StatusKind::Success, &message.to_string());
}

/// Untagged line on stdout, used for usage text.
pub fn plain(message: impl Display) {
    let mut handle = io::stdout().lock();
    let _ = writeln!(handle, "{message}");
    let _ = handle.flush();
}

/// Wrap `text` in a bold style when stdout is a terminal.
pub fn bold(text: &str) -> String {
    if supports_color(false) {
        let style = Style::new().bold();
        format!("{}{text}{}", style.render(), style.render_reset())
    } else {
        text.to_string()
    }
}
