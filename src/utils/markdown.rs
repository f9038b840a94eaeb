// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Flatten Markdown panel bodies into simple blocks the egui view can lay out.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// One renderable block of a tab panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Item(String),
}

/// Parse Markdown into headings, paragraphs, and list items.
///
/// Inline markup is reduced to its text; code spans keep their content.
pub fn to_blocks(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut buffer = String::new();
    let mut heading: Option<u8> = None;
    let mut in_item = 0usize;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush_item(&mut blocks, &mut buffer, in_item);
                heading = Some(heading_level(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                let text = take_trimmed(&mut buffer);
                if !text.is_empty() {
                    blocks.push(Block::Heading {
                        level: heading.unwrap_or(1),
                        text,
                    });
                }
                heading = None;
            }
            Event::Start(Tag::Item) => {
                flush_item(&mut blocks, &mut buffer, in_item);
                in_item += 1;
            }
            Event::End(TagEnd::Item) => {
                flush_item(&mut blocks, &mut buffer, in_item);
                in_item = in_item.saturating_sub(1);
            }
            Event::End(TagEnd::Paragraph) if in_item == 0 => {
                let text = take_trimmed(&mut buffer);
                if !text.is_empty() {
                    blocks.push(Block::Paragraph(text));
                }
            }
            Event::Text(text) | Event::Code(text) => buffer.push_str(&text),
            Event::SoftBreak | Event::HardBreak => buffer.push(' '),
            _ => {}
        }
    }

    let rest = take_trimmed(&mut buffer);
    if !rest.is_empty() {
        blocks.push(Block::Paragraph(rest));
    }
    blocks
}

fn flush_item(blocks: &mut Vec<Block>, buffer: &mut String, in_item: usize) {
    if in_item > 0 {
        let text = take_trimmed(buffer);
        if !text.is_empty() {
            blocks.push(Block::Item(text));
        }
    }
}

fn take_trimmed(buffer: &mut String) -> String {
    let text = buffer.trim().to_string();
    buffer.clear();
    text
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
