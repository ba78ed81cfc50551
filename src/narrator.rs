//! Console narration: introduction, controls menu and start/stop banners.
//!
//! [`Console`] is generic over its reader and writer so the menu flow can be
//! driven from byte buffers in tests.

use crate::data::constants::ARRAY_SIZE;
use crate::engine::Algorithm;
use std::fmt;
use std::io::{self, BufRead, Write};

/// A one-line announcement of something the visualizer just did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    NewList,
    Started(Algorithm),
    Completed(Algorithm),
    ExitingVisualizer,
    ExitingProgram,
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::NewList => write!(f, "NEW RANDOM LIST GENERATED."),
            Banner::Started(alg) => write!(f, "{} STARTED.", alg.name().to_uppercase()),
            Banner::Completed(alg) => write!(f, "{} COMPLETE.", alg.name().to_uppercase()),
            Banner::ExitingVisualizer => write!(f, "EXITING SORTING VISUALIZER."),
            Banner::ExitingProgram => write!(f, "EXITING PROGRAM."),
        }
    }
}

/// What the user chose at the controls menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// Typed at the controls menu to quit instead of starting the visualizer
pub const QUIT_INPUT: &str = "-1";

pub fn introduction() -> String {
    format!(
        "==============================Sorting Visualizer==============================\n\n\
         Visualization of different sorting algorithms in the terminal. A sorting algorithm \
         is an algorithm that puts the elements of a list in a certain order. While there are \
         a large number of sorting algorithms, in practical implementations a few algorithms \
         predominate.\n\
         In this sorting visualizer we look at some of these algorithms and follow their \
         work step by step.\n\
         The sorting algorithms covered here are Selection Sort, Insertion Sort, Bubble Sort, \
         Merge Sort, Quick Sort and Heap Sort.\n\
         The list size is fixed to {} elements. You can randomize the list and \
         run any of the algorithms on it from the given options. All algorithms sort the \
         elements in ascending order. The animation time of an algorithm does not reflect its \
         actual time complexity: the relatively faster algorithms, like Merge Sort, are \
         slowed down so that they can be followed.\n\n\
         Press ENTER to show controls...",
        ARRAY_SIZE
    )
}

pub fn controls() -> String {
    let mut text = String::from(
        "WARNING: Keys pressed while a sort is running are only handled once it finishes. \
         Please give a new command only after the current one is done.\n\n\
         Available Controls inside Sorting Visualizer:-\n\
         \x20   Use 0 to Generate a different randomized list.\n",
    );
    for alg in Algorithm::ALL {
        text.push_str(&format!(
            "    Use {} to start {} Algorithm.\n",
            alg.key(),
            alg.name()
        ));
    }
    text.push_str(
        "    Use q to exit out of Sorting Visualizer\n\n\
         PRESS ENTER TO START SORTING VISUALIZER...\n\n\
         Or type -1 and press ENTER to quit the program.",
    );
    text
}

/// Line-oriented console used outside the visualizer
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print the introduction and wait for a line of input
    pub fn show_introduction(&mut self) -> io::Result<()> {
        write!(self.output, "{}", introduction())?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Print the controls and read the user's choice.
    /// End of input counts as quitting.
    pub fn show_controls(&mut self) -> io::Result<MenuChoice> {
        write!(self.output, "\n{}", controls())?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(line) if line.trim() == QUIT_INPUT => MenuChoice::Quit,
            Some(_) => MenuChoice::Start,
            None => MenuChoice::Quit,
        })
    }

    pub fn announce(&mut self, banner: Banner) -> io::Result<()> {
        writeln!(self.output, "\n{banner}")?;
        self.output.flush()
    }

    /// Print an arbitrary message line, such as an initialization failure
    pub fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
