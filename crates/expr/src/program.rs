use crate::registry::Function;

/// A single step of a compiled expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Instruction {
    Push(f64),
    LoadX,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Call(Function),
}

impl Instruction {
    /// Net change in stack height after executing this instruction.
    fn stack_effect(self) -> isize {
        match self {
            Self::Push(_) | Self::LoadX => 1,
            Self::Neg | Self::Call(_) => 0,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow => -1,
        }
    }
}

/// A postfix program computing an expression's value from `x`.
///
/// Programs are only built by the parser, which guarantees that every
/// operator finds its operands on the stack and that exactly one value
/// remains at the end.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Program {
    code: Vec<Instruction>,
    height: isize,
    max_height: usize,
}

impl Program {
    pub(crate) fn emit(&mut self, instruction: Instruction) {
        self.height += instruction.stack_effect();
        self.max_height = self.max_height.max(self.height.unsigned_abs());
        self.code.push(instruction);
    }

    /// Evaluates the program at `x` using `stack` as scratch space.
    pub(crate) fn run(&self, x: f64, stack: &mut Vec<f64>) -> f64 {
        stack.clear();
        stack.reserve(self.max_height);

        for &instruction in &self.code {
            match instruction {
                Instruction::Push(value) => stack.push(value),
                Instruction::LoadX => stack.push(x),
                Instruction::Neg => {
                    if let Some(top) = stack.last_mut() {
                        *top = -*top;
                    }
                }
                Instruction::Call(function) => {
                    if let Some(top) = stack.last_mut() {
                        *top = function.apply(*top);
                    }
                }
                binary => {
                    let rhs = stack.pop();
                    if let (Some(rhs), Some(lhs)) = (rhs, stack.last_mut()) {
                        *lhs = apply_binary(binary, *lhs, rhs);
                    }
                }
            }
        }

        stack.pop().unwrap_or(f64::NAN)
    }
}

fn apply_binary(instruction: Instruction, lhs: f64, rhs: f64) -> f64 {
    match instruction {
        Instruction::Add => lhs + rhs,
        Instruction::Sub => lhs - rhs,
        Instruction::Mul => lhs * rhs,
        Instruction::Div => lhs / rhs,
        Instruction::Pow => lhs.powf(rhs),
        _ => f64::NAN,
    }
}
