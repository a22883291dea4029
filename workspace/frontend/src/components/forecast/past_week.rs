use common::display::past_week_rows;
use common::PastDay;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub past_week: Vec<PastDay>,
}

/// Observed averages for the past week.
#[function_component(PastWeekTable)]
pub fn past_week_table(props: &Props) -> Html {
    let rows = past_week_rows(&props.past_week);

    html! {
        <div class="card past-week bg-base-100 shadow mt-4">
            <div class="card-body">
                <div class="small text-sm text-gray-500">{"Past week (observed averages)"}</div>
                <div class="overflow-x-auto mt-2">
                    <table class="past-table table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th class="text-right">{"Avg (°C)"}</th>
                                <th class="text-right">{"Avg (°F)"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for rows.into_iter().map(|row| html! {
                                <tr class="past-row">
                                    <td>{row.date}</td>
                                    <td class="text-right">{row.celsius}</td>
                                    <td class="text-right">{row.fahrenheit}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
