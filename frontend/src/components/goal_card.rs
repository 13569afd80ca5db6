use shared::Goal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
    pub goals: Vec<Goal>,
}

#[function_component(GoalCard)]
pub fn goal_card(props: &GoalCardProps) -> Html {
    html! {
        <section class="card goal-section">
            <div class="card-header">
                <h3 class="card-title">{"Financial Goals"}</h3>
            </div>

            <div class="goal-list">
                {for props.goals.iter().map(|goal| html! {
                    <div class="goal-item" key={goal.name.clone()}>
                        <div class="goal-header">
                            <span class="goal-name">{&goal.name}</span>
                            <span class="goal-amount">{goal.progress_label()}</span>
                        </div>

                        <div class="progress-bar">
                            <div
                                class="progress-fill"
                                style={format!(
                                    "width: {:.1}%; background-color: {}",
                                    goal.progress_percent(),
                                    goal.color.css()
                                )}
                            ></div>
                        </div>
                        <div class="progress-text">{goal.completion_caption()}</div>
                    </div>
                })}
            </div>
        </section>
    }
}
