#[cfg(test)]
mod alias;




#[cfg(test)]
mod where_clause;


#[cfg(test)]
mod limit;


#[cfg(test)]
mod case;
