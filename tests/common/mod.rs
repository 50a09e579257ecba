#![allow(dead_code)]

use compgen::error::Result;
use compgen::prompt::{Prompter, TextValidator};
use std::cell::RefCell;
use std::collections::VecDeque;

/// One scripted answer to a prompt.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(&'static str),
    Select(usize),
    Multi(Vec<usize>),
    Cancel,
}

/// Prompter that answers from a fixed script instead of the terminal.
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: RefCell<VecDeque<Reply>>,
    pub rejected: RefCell<Vec<String>>,
    pub asked: RefCell<Vec<String>>,
    pub selects: RefCell<Vec<(Vec<String>, usize)>>,
    pub multi_selects: RefCell<Vec<(Vec<String>, Vec<bool>)>>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            ..Default::default()
        }
    }

    fn next(&self, prompt: &str) -> Reply {
        self.asked.borrow_mut().push(prompt.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &str, validate: TextValidator<'_>) -> Result<Option<String>> {
        loop {
            match self.next(prompt) {
                Reply::Text(input) => match validate(input) {
                    Ok(()) => return Ok(Some(input.to_string())),
                    Err(message) => self.rejected.borrow_mut().push(message),
                },
                Reply::Cancel => return Ok(None),
                other => panic!("expected text reply for '{prompt}', got {other:?}"),
            }
        }
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        self.selects.borrow_mut().push((items.to_vec(), default));
        match self.next(prompt) {
            Reply::Select(index) => Ok(Some(index)),
            Reply::Cancel => Ok(None),
            other => panic!("expected select reply for '{prompt}', got {other:?}"),
        }
    }

    fn multi_select(
        &self,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        self.multi_selects
            .borrow_mut()
            .push((items.to_vec(), defaults.to_vec()));
        match self.next(prompt) {
            Reply::Multi(indices) => Ok(Some(indices)),
            Reply::Cancel => Ok(None),
            other => panic!("expected multi-select reply for '{prompt}', got {other:?}"),
        }
    }
}
