use chrono::NaiveDate;

use crate::error::{CalzikError, CalzikResult};
use crate::model::{Idea, IdeaStatus, new_id};

#[derive(Debug, Clone, Default)]
pub struct IdeaBoard {
    ideas: Vec<Idea>,
}

impl IdeaBoard {
    pub fn new(ideas: Vec<Idea>) -> Self {
        IdeaBoard { ideas }
    }

    pub fn all(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn add(&mut self, text: &str, author: &str, today: NaiveDate) -> CalzikResult<&Idea> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CalzikError::Validation("an idea needs some text".into()));
        }
        self.ideas.push(Idea {
            id: new_id(),
            text: text.to_string(),
            author: author.to_string(),
            date: today,
            status: IdeaStatus::Todo,
        });
        Ok(&self.ideas[self.ideas.len() - 1])
    }

    pub fn set_status(&mut self, id: &str, status: IdeaStatus) -> CalzikResult<&Idea> {
        let idea = self.find_mut(id)?;
        idea.status = status;
        Ok(idea)
    }

    pub fn edit(&mut self, id: &str, text: &str) -> CalzikResult<&Idea> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CalzikError::Validation("an idea needs some text".into()));
        }
        let idea = self.find_mut(id)?;
        idea.text = text.to_string();
        Ok(idea)
    }

    pub fn delete(&mut self, id: &str) -> CalzikResult<Idea> {
        let index = self
            .ideas
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CalzikError::not_found("Idea", id))?;
        Ok(self.ideas.remove(index))
    }

    pub fn pending(&self) -> Vec<&Idea> {
        self.ideas
            .iter()
            .filter(|i| i.status != IdeaStatus::Done)
            .collect()
    }

    pub fn done(&self) -> Vec<&Idea> {
        self.ideas
            .iter()
            .filter(|i| i.status == IdeaStatus::Done)
            .collect()
    }

    fn find_mut(&mut self, id: &str) -> CalzikResult<&mut Idea> {
        self.ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CalzikError::not_found("Idea", id))
    }
}
