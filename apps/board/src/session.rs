use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::board::input::HELP;
use crate::board::{parse_command, render, Board, Command};

/// Runs one view session: render, read an interaction, apply it, re-render.
/// Each line is handled to completion before the next is read. Ends on
/// `quit` or end of input.
pub async fn run<R, W>(board: &mut Board, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_frame(board, &mut output).await?;
    if board.tags_interactive() {
        output.write_all(b"Type 'help' for commands.\n").await?;
    }
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = parse_command(&line, &board.view());
        match command {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => {
                output.write_all(HELP.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            Ok(Some(Command::Intent(intent))) => match board.dispatch(intent) {
                Ok(_) => write_frame(board, &mut output).await?,
                Err(e) => notice(&mut output, &e).await?,
            },
            Err(e) => {
                debug!("Rejected input {line:?}: {e}");
                notice(&mut output, &e).await?;
            }
        }
        output.flush().await?;
    }

    info!("Session ended with {} active filters", board.filters().len());
    Ok(())
}

async fn write_frame<W: AsyncWrite + Unpin>(board: &Board, output: &mut W) -> Result<()> {
    let frame = render(&board.view());
    output.write_all(frame.as_bytes()).await?;
    Ok(())
}

async fn notice<W: AsyncWrite + Unpin>(output: &mut W, e: &impl std::fmt::Display) -> Result<()> {
    output.write_all(format!("! {e}\n").as_bytes()).await?;
    Ok(())
}
