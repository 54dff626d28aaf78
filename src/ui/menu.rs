//! Menu choices and whitespace-separated input

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::game::Upgrade;

/// Top-level menu options 1-6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Explore,
    Rest,
    Shop,
    Save,
    Load,
    Quit,
}

impl MenuChoice {
    /// `None` for anything that isn't one of the listed numbers
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().parse::<i32>().ok()? {
            1 => Some(MenuChoice::Explore),
            2 => Some(MenuChoice::Rest),
            3 => Some(MenuChoice::Shop),
            4 => Some(MenuChoice::Save),
            5 => Some(MenuChoice::Load),
            6 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Shop sub-menu options 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopChoice {
    Buy(Upgrade),
    Leave,
}

impl ShopChoice {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().parse::<i32>().ok()? {
            1 => Some(ShopChoice::Buy(Upgrade::SharpenSword)),
            2 => Some(ShopChoice::Buy(Upgrade::HealthPotion)),
            3 => Some(ShopChoice::Buy(Upgrade::ExpPotion)),
            4 => Some(ShopChoice::Leave),
            _ => None,
        }
    }
}

/// Splits buffered input into whitespace-separated tokens, reading lines
/// only as needed.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}
