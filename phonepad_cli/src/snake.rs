//! 控制台贪吃蛇：固定间隔 tick，无键盘捕获（蛇沿当前方向前进直到撞墙/撞到自己）。
use std::{
    collections::VecDeque,
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

pub const WIDTH: u16 = 20;
pub const HEIGHT: u16 = 10;
/// 结束后定格最后一帧的时长
pub const GAME_OVER_HOLD: Duration = Duration::from_secs(1);

pub type Cell = (u16, u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

pub struct SnakeGame {
    width: u16,
    height: u16,
    /// 头在最前
    body: VecDeque<Cell>,
    direction: Direction,
    food: Option<Cell>,
    score: u32,
    over: bool,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new() -> Self {
        Self::with_rng(WIDTH, HEIGHT, StdRng::from_os_rng())
    }

    pub fn with_seed(width: u16, height: u16, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: u16, height: u16, rng: StdRng) -> Self {
        let width = width.max(2);
        let height = height.max(1);
        let mut game = Self {
            width,
            height,
            body: VecDeque::from([(width / 2, height / 2)]),
            direction: Direction::Right,
            food: None,
            score: 0,
            over: false,
            rng,
        };
        game.place_food();
        game
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// 改变方向；长度大于 1 时不能直接掉头。
    pub fn turn(&mut self, direction: Direction) {
        if self.body.len() > 1 && direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// 前进一步。撞墙或撞到自己则结束；吃到食物则变长并重新放食物。
    pub fn tick(&mut self) {
        if self.over {
            return;
        }
        let (x, y) = self.head();
        let next = match self.direction {
            Direction::Up => y.checked_sub(1).map(|y| (x, y)),
            Direction::Down => (y + 1 < self.height).then_some((x, y + 1)),
            Direction::Left => x.checked_sub(1).map(|x| (x, y)),
            Direction::Right => (x + 1 < self.width).then_some((x + 1, y)),
        };
        let Some(next) = next else {
            debug!(head = ?(x, y), "hit the wall");
            self.over = true;
            return;
        };
        if self.body.contains(&next) {
            debug!(head = ?next, "ran into itself");
            self.over = true;
            return;
        }
        self.body.push_front(next);
        if self.food == Some(next) {
            self.score += 1;
            self.place_food();
        } else {
            self.body.pop_back();
        }
    }

    /// 随机放食物；棋盘已满时没有食物，游戏结束。
    fn place_food(&mut self) {
        let free = usize::from(self.width) * usize::from(self.height) - self.body.len();
        if free == 0 {
            self.food = None;
            self.over = true;
            return;
        }
        loop {
            let cell = (
                self.rng.random_range(0..self.width),
                self.rng.random_range(0..self.height),
            );
            if !self.body.contains(&cell) {
                self.food = Some(cell);
                return;
            }
        }
    }

    /// `#` 边框，`O` 蛇头，`o` 蛇身，`*` 食物。
    pub fn render(&self) -> String {
        let border = "#".repeat(usize::from(self.width) + 2);
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        for y in 0..self.height {
            out.push('#');
            for x in 0..self.width {
                let cell = (x, y);
                let ch = if cell == self.head() {
                    'O'
                } else if self.body.contains(&cell) {
                    'o'
                } else if self.food == Some(cell) {
                    '*'
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push_str("#\n");
        }
        out.push_str(&border);
        out.push('\n');
        out
    }

    /// 停顿一段时间，不推进游戏。
    pub fn pause(&self, hold: Duration) {
        debug!(?hold, "pause");
        thread::sleep(hold);
    }

    /// 运行到游戏结束，定格最后一帧 `hold` 时长，返回得分。
    pub fn run(&mut self, out: &mut impl Write, tick: Duration, hold: Duration) -> io::Result<u32> {
        while !self.over {
            self.draw(out)?;
            self.tick();
            thread::sleep(tick);
        }
        self.draw(out)?;
        self.pause(hold);
        Ok(self.score)
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(out, "{}", self.render())?;
        writeln!(out, "score: {}", self.score)?;
        out.flush()
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}
