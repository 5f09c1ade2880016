use crate::error::{LoxError, Result};
use crate::token::Token;
use crate::value::Value;
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to an environment.  Blocks, calls and closures all hold
/// these; a scope lives as long as its longest holder.
pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: EnvRef) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Always binds in *this* scope, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Look `name` up here, then outward.
    pub fn get(&self, name: &Token) -> Result<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name)
        } else {
            Err(undefined(name))
        }
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value)
        } else {
            Err(undefined(name))
        }
    }

    /// The environment exactly `distance` links outward from `env`.
    pub fn ancestor(env: &EnvRef, distance: usize) -> Option<EnvRef> {
        let mut current: EnvRef = Rc::clone(env);

        for _ in 0..distance {
            let next: EnvRef = current.borrow().enclosing.clone()?;
            current = next;
        }

        Some(current)
    }

    /// Read `name` from the scope `distance` hops out, without walking further.
    pub fn get_at(env: &EnvRef, distance: usize, name: &Token) -> Result<Value> {
        debug!("get_at '{}' distance {}", name.lexeme, distance);

        let scope: EnvRef = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        let value: Option<Value> = scope.borrow().values.get(&name.lexeme).cloned();

        value.ok_or_else(|| undefined(name))
    }

    /// Write `name` into the scope `distance` hops out.
    pub fn assign_at(env: &EnvRef, distance: usize, name: &Token, value: Value) -> Result<()> {
        debug!("assign_at '{}' distance {}", name.lexeme, distance);

        let target: EnvRef = Self::ancestor(env, distance).ok_or_else(|| undefined(name))?;
        let mut target = target.borrow_mut();

        match target.values.get_mut(&name.lexeme) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(undefined(name)),
        }
    }
}

fn undefined(name: &Token) -> LoxError {
    LoxError::runtime(name, format!("Undefined variable '{}'.", name.lexeme))
}
