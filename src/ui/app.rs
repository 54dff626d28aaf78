//! The menu loop
//!
//! Reads numbered choices and names from any buffered reader and writes
//! game text to any writer, so a whole session can be scripted.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use super::menu::{MenuChoice, ShopChoice, Tokens};
use super::text;
use crate::game::{Game, GameState, LoadOutcome};

pub struct App<I, O> {
    input: Tokens<I>,
    output: O,
}

impl<I: BufRead, O: Write> App<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input: Tokens::new(input),
            output,
        }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> O {
        self.output
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn say_all(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Run until the player quits, dies, or input runs out
    pub fn run<R: Rng>(&mut self, game: &mut Game<R>) -> Result<()> {
        self.say(text::INTRO)?;

        while game.is_playing() {
            self.say(&text::status_line(game.player()))?;
            self.say(text::MAIN_MENU)?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                log::info!("Input closed, quitting");
                game.quit();
                break;
            };

            match MenuChoice::parse(&token) {
                Some(MenuChoice::Explore) => {
                    let report = game.explore();
                    self.say_all(&text::combat_lines(&report))?;
                    if let GameState::GameOver { score } = game.state() {
                        self.say(&text::game_over(score))?;
                    }
                }
                Some(MenuChoice::Rest) => {
                    let outcome = game.rest();
                    self.say(&text::rest(&outcome))?;
                }
                Some(MenuChoice::Shop) => self.shop(game)?,
                Some(MenuChoice::Save) => self.save(game)?,
                Some(MenuChoice::Load) => self.load(game)?,
                Some(MenuChoice::Quit) => {
                    self.say(text::FAREWELL)?;
                    game.quit();
                }
                None => self.say(text::INVALID_CHOICE)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn shop<R: Rng>(&mut self, game: &mut Game<R>) -> Result<()> {
        loop {
            self.say(&text::status_line(game.player()))?;
            self.say(&text::shop_menu(game.shop()))?;
            self.output.flush()?;

            let Some(token) = self.input.next_token()? else {
                return Ok(());
            };

            match ShopChoice::parse(&token) {
                Some(ShopChoice::Buy(upgrade)) => {
                    let outcome = game.buy(upgrade);
                    self.say_all(&text::purchase(&outcome))?;
                }
                Some(ShopChoice::Leave) => return Ok(()),
                None => self.say(text::INVALID_CHOICE)?,
            }
        }
    }

    /// Ask for a save name. `None` at end of input.
    fn prompt_name(&mut self, prompt: &str) -> Result<Option<String>> {
        self.say(prompt)?;
        self.output.flush()?;
        let name = self.input.next_token()?;
        if let Some(name) = &name {
            self.say(&format!("Filename is {}.txt", name))?;
        }
        Ok(name)
    }

    fn save<R: Rng>(&mut self, game: &mut Game<R>) -> Result<()> {
        let Some(name) = self.prompt_name("Please enter a name with no spaces")? else {
            return Ok(());
        };
        match game.save(&name) {
            Ok(_) => self.say("Game saved!"),
            Err(e) => {
                log::warn!("Save failed: {}", e);
                self.say(&format!("Unable to open file for writing! ({})", e))
            }
        }
    }

    fn load<R: Rng>(&mut self, game: &mut Game<R>) -> Result<()> {
        let Some(name) =
            self.prompt_name("Please enter the name you used to save your game with no spaces")?
        else {
            return Ok(());
        };
        match game.load(&name) {
            LoadOutcome::Loaded { .. } => self.say("Game loaded!"),
            LoadOutcome::FellBack { error } => {
                self.say(&format!("Unable to open file for reading! ({})", error))?;
                self.say("Starting over with a new adventurer.")
            }
        }
    }
}
