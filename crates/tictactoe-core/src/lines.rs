/// Three cell indices that win when they hold the same mark.
pub type WinLine = [usize; 3];

/// Every win line, in the order the outcome evaluator scans them:
/// rows top to bottom, columns left to right, then the two diagonals.
/// When several lines are complete, the first one here is reported.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];
