//! Prompt text sent to the generation service.

pub const PLANNER_SYSTEM_PROMPT: &str = "You are an expert project planner. \
You break high-level goals into clear, atomic subtasks with concrete outcomes \
and never skip obvious prerequisites.";

pub const REFINER_SYSTEM_PROMPT: &str = "You are an execution-focused project \
manager. You know how long realistic tasks take and how to order them for flow.";

/// Builds the user message asking for a numbered subtask list.
pub fn plan_request(goal_title: &str, goal_description: &str) -> String {
    format!(
        "Plan this specific goal.\n\
         Goal title: {goal_title}\n\
         Goal description: {goal_description}\n\n\
         Break the goal into 5-10 concrete, actionable subtasks that are specific \
         to this exact goal. Do not give generic project planning advice.\n\n\
         Return them as a numbered list:\n\
         1. [Specific action for this goal]\n\
         2. [Another specific action]\n\
         3. [etc.]\n"
    )
}

/// Builds the user message asking for estimates and ordering of a plan.
pub fn refinement_request(goal_title: &str, goal_description: &str, raw_text: &str) -> String {
    format!(
        "Refine the subtasks for this goal.\n\
         Goal title: {goal_title}\n\
         Goal description: {goal_description}\n\n\
         Subtasks:\n{raw_text}\n\n\
         For each subtask suggest a realistic time estimate in minutes and, if \
         useful, a more logical execution order. Reply with the same numbered \
         format, optionally followed by a JSON object with a 'subtasks' array \
         whose items have: task, estimated_duration (int, minutes), priority (int).\n"
    )
}
