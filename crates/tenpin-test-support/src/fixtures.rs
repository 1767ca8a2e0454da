//! Canonical roll sequences with their official scores.

/// A complete game as the sequence of pins knocked down per roll.
#[derive(Debug, Clone, Copy)]
pub struct GameFixture {
    /// Short label used in assertion messages.
    pub name: &'static str,
    /// Every roll in delivery order.
    pub rolls: &'static [i32],
    /// The official score of the finished game.
    pub score: u32,
}

/// Twelve strikes.
pub const PERFECT_GAME: GameFixture = GameFixture {
    name: "perfect game",
    rolls: &[10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10],
    score: 300,
};

/// Twenty gutter balls.
pub const GUTTER_GAME: GameFixture = GameFixture {
    name: "gutter game",
    rolls: &[0; 20],
    score: 0,
};

/// Nine 5/5 spares and a 5/5/5 tenth frame.
pub const ALL_FIVES: GameFixture = GameFixture {
    name: "all fives",
    rolls: &[5; 21],
    score: 150,
};

/// One opening strike and nothing after it.
pub const LONE_STRIKE: GameFixture = GameFixture {
    name: "lone strike",
    rolls: &[10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    score: 10,
};

/// A single pin every roll.
pub const ALL_ONES: GameFixture = GameFixture {
    name: "all ones",
    rolls: &[1; 20],
    score: 20,
};

/// An opening spare collecting a three-pin bonus.
pub const OPENING_SPARE: GameFixture = GameFixture {
    name: "opening spare",
    rolls: &[5, 5, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    score: 16,
};

/// Nine pins and a miss in every frame.
pub const NINE_AND_MISS: GameFixture = GameFixture {
    name: "nine and a miss",
    rolls: &[9, 0, 9, 0, 9, 0, 9, 0, 9, 0, 9, 0, 9, 0, 9, 0, 9, 0, 9, 0],
    score: 90,
};

/// Strike in the tenth followed by an open pair of bonus balls.
pub const TENTH_STRIKE_OPEN_BONUS: GameFixture = GameFixture {
    name: "tenth frame strike, open bonus",
    rolls: &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 7, 2,
    ],
    score: 19,
};

/// Two strikes in the tenth then a seven.
pub const TENTH_DOUBLE_STRIKE: GameFixture = GameFixture {
    name: "tenth frame double strike",
    rolls: &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 10, 7,
    ],
    score: 27,
};

/// Spare in the tenth with a strike as the bonus ball.
pub const TENTH_SPARE_STRIKE_BONUS: GameFixture = GameFixture {
    name: "tenth frame spare, strike bonus",
    rolls: &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7, 3, 10,
    ],
    score: 20,
};

/// Strikes and spares alternating for the whole game.
pub const DUTCH_200: GameFixture = GameFixture {
    name: "dutch 200",
    rolls: &[10, 5, 5, 10, 5, 5, 10, 5, 5, 10, 5, 5, 10, 5, 5, 10],
    score: 200,
};

/// A typical league game mixing every frame kind.
pub const LEAGUE_GAME: GameFixture = GameFixture {
    name: "league game",
    rolls: &[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1],
    score: 167,
};

/// Every complete-game fixture.
pub const COMPLETE_GAMES: &[GameFixture] = &[
    PERFECT_GAME,
    GUTTER_GAME,
    ALL_FIVES,
    LONE_STRIKE,
    ALL_ONES,
    OPENING_SPARE,
    NINE_AND_MISS,
    TENTH_STRIKE_OPEN_BONUS,
    TENTH_DOUBLE_STRIKE,
    TENTH_SPARE_STRIKE_BONUS,
    DUTCH_200,
    LEAGUE_GAME,
];
